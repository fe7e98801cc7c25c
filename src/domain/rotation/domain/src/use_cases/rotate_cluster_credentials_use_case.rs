// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use database_common::UnsupportedEngineError;
use internal_error::InternalError;
use thiserror::Error;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Handles a single cluster creation event: replaces the master password with
/// a random one and, unless the filter script rejects the cluster, provisions
/// application users and publishes their secrets.
///
/// Stages run strictly in order:
/// 1. look up the cluster (exactly one must match)
/// 2. evaluate the filter script, a negative decision ends the run
/// 3. resolve the database driver from the engine name
/// 4. generate and apply the master password
/// 5. wait for the new password to propagate (interruptible)
/// 6. generate application user passwords and evaluate provisioning scripts
/// 7. run the statements in one transaction
/// 8. publish the secrets
///
/// The master password change is never undone, and secrets published before
/// a publishing failure are left in place.
#[async_trait::async_trait]
pub trait RotateClusterCredentialsUseCase: Send + Sync {
    async fn execute(
        &self,
        event: &ClusterCreatedEvent,
        ctx: &InvocationContext,
    ) -> Result<RotationOutcome, RotateClusterCredentialsError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationOutcome {
    /// The filter script rejected the cluster, nothing was changed
    Skipped,
    Completed {
        statements_executed: usize,
        secrets_published: usize,
    },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum RotateClusterCredentialsError {
    #[error(transparent)]
    MalformedEvent(#[from] MalformedEventError),

    #[error(transparent)]
    ClusterLookup(#[from] ClusterLookupError),

    #[error(transparent)]
    UnsupportedEngine(#[from] UnsupportedEngineError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Policy(#[from] PolicyEvaluationError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Commit(#[from] CommitError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error("Control plane operation '{operation}' failed")]
    ControlPlane {
        operation: ControlPlaneOperation,
        #[source]
        source: ControlPlaneError,
    },

    #[error(transparent)]
    Cancelled(#[from] CancelledError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl RotateClusterCredentialsError {
    /// Stable name of the failure kind, suitable for structured logs and
    /// alerting rules
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedEvent(_) => "MalformedEventError",
            Self::ClusterLookup(_) => "ClusterLookupError",
            Self::UnsupportedEngine(_) => "UnsupportedEngineError",
            Self::Generation(_) => "GenerationError",
            Self::Policy(e) => match e {
                PolicyEvaluationError::Evaluation { .. } => "EvaluationError",
                PolicyEvaluationError::MissingResult { .. } => "MissingResultError",
                PolicyEvaluationError::TypeMismatch { .. } => "TypeMismatchError",
                PolicyEvaluationError::FieldMissing { .. } => "FieldMissingError",
                PolicyEvaluationError::Internal(_) => "InternalError",
            },
            Self::Execution(_) => "ExecutionError",
            Self::Commit(_) => "CommitError",
            Self::Publish(_) => "PublishError",
            Self::ControlPlane { .. } => "ControlPlaneError",
            Self::Cancelled(_) => "CancelledError",
            Self::Internal(_) => "InternalError",
        }
    }

    pub fn control_plane(operation: ControlPlaneOperation, source: ControlPlaneError) -> Self {
        Self::ControlPlane { operation, source }
    }
}

impl From<SqlRunError> for RotateClusterCredentialsError {
    fn from(value: SqlRunError) -> Self {
        match value {
            SqlRunError::Execution(e) => Self::Execution(e),
            SqlRunError::Commit(e) => Self::Commit(e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum ControlPlaneOperation {
    #[strum(to_string = "describe clusters")]
    DescribeClusters,
    #[strum(to_string = "set master password")]
    SetMasterPassword,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Expected exactly one cluster with identifier '{identifier}', found {found}")]
pub struct ClusterLookupError {
    pub identifier: String,
    pub found: usize,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invocation {cause} while {stage}")]
pub struct CancelledError {
    pub stage: &'static str,
    pub cause: InterruptCause,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
