// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use database_common::{DatabaseConnectionSettings, DatabaseCredentials, DatabaseError};
use thiserror::Error;

use crate::ProvisioningStatement;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Executes provisioning statements as a single all-or-nothing transaction
#[async_trait::async_trait]
pub trait ProvisioningSqlRunner: Send + Sync {
    async fn run(
        &self,
        settings: &DatabaseConnectionSettings,
        credentials: &DatabaseCredentials,
        statements: &[ProvisioningStatement],
    ) -> Result<(), SqlRunError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum SqlRunError {
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Commit(#[from] CommitError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Failed to connect to the database")]
    Connect {
        #[source]
        source: DatabaseError,
    },

    #[error("Failed to begin a transaction")]
    Begin {
        #[source]
        source: DatabaseError,
    },

    #[error("Statement at index {index} failed, the transaction was rolled back")]
    Statement {
        index: usize,
        #[source]
        source: DatabaseError,
    },

    #[error(
        "Statement at index {index} failed and the transaction could not be rolled back: {}",
        .rollback_error.reason()
    )]
    StatementAndRollback {
        index: usize,
        #[source]
        source: DatabaseError,
        rollback_error: DatabaseError,
    },
}

impl ExecutionError {
    /// Index of the failed statement, if the failure happened while executing one
    pub fn statement_index(&self) -> Option<usize> {
        match self {
            Self::Statement { index, .. } | Self::StatementAndRollback { index, .. } => {
                Some(*index)
            }
            Self::Connect { .. } | Self::Begin { .. } => None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Outcome of the transaction is unknown when committing fails
#[derive(Error, Debug)]
#[error("Failed to commit the transaction")]
pub struct CommitError {
    #[source]
    pub source: DatabaseError,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
