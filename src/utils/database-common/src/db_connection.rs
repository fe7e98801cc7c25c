// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{DatabaseConnectionSettings, DatabaseCredentials, DatabaseError, SqlArgument};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Opens exclusive connections to a database
#[async_trait::async_trait]
pub trait DatabaseConnector: Send + Sync {
    async fn connect(
        &self,
        settings: &DatabaseConnectionSettings,
        credentials: &DatabaseCredentials,
    ) -> Result<Box<dyn DatabaseConnection>, DatabaseError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A single live connection that runs at most one transaction at a time.
///
/// Dropping a connection with an open transaction rolls it back, but callers
/// should always finish with [`DatabaseConnection::close`] to observe errors.
#[async_trait::async_trait]
pub trait DatabaseConnection: Send {
    async fn begin(&mut self) -> Result<(), DatabaseError>;

    /// Executes a statement inside the open transaction with positional
    /// arguments, returning the number of affected rows
    async fn execute(&mut self, sql: &str, args: &[SqlArgument]) -> Result<u64, DatabaseError>;

    async fn commit(&mut self) -> Result<(), DatabaseError>;

    async fn rollback(&mut self) -> Result<(), DatabaseError>;

    async fn close(self: Box<Self>) -> Result<(), DatabaseError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
