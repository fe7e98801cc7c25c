// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use database_common::{
    DatabaseConnection,
    DatabaseConnectionSettings,
    DatabaseConnector,
    DatabaseCredentials,
};
use dbinit_rotation::*;
use dill::{component, interface};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn ProvisioningSqlRunner)]
pub struct ProvisioningSqlRunnerImpl {
    database_connector: Arc<dyn DatabaseConnector>,
}

impl ProvisioningSqlRunnerImpl {
    async fn run_in_transaction(
        connection: &mut dyn DatabaseConnection,
        statements: &[ProvisioningStatement],
    ) -> Result<(), SqlRunError> {
        connection
            .begin()
            .await
            .map_err(|source| ExecutionError::Begin { source })?;

        for (index, statement) in statements.iter().enumerate() {
            if let Err(source) = connection.execute(&statement.sql, &statement.args).await {
                tracing::warn!(index, error = %source, "Statement failed, rolling back");

                let error = match connection.rollback().await {
                    Ok(()) => ExecutionError::Statement { index, source },
                    Err(rollback_error) => {
                        tracing::error!(
                            index,
                            error = ?rollback_error,
                            error_msg = %rollback_error.reason(),
                            "Failed to roll back the transaction"
                        );
                        ExecutionError::StatementAndRollback {
                            index,
                            source,
                            rollback_error,
                        }
                    }
                };
                return Err(error.into());
            }

            tracing::debug!(index, "Statement executed");
        }

        connection
            .commit()
            .await
            .map_err(|source| CommitError { source })?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl ProvisioningSqlRunner for ProvisioningSqlRunnerImpl {
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(
            provider = %settings.provider,
            host = %settings.host,
            num_statements = statements.len(),
        )
    )]
    async fn run(
        &self,
        settings: &DatabaseConnectionSettings,
        credentials: &DatabaseCredentials,
        statements: &[ProvisioningStatement],
    ) -> Result<(), SqlRunError> {
        if statements.is_empty() {
            tracing::info!("No provisioning statements, skipping database connection");
            return Ok(());
        }

        let mut connection = self
            .database_connector
            .connect(settings, credentials)
            .await
            .map_err(|source| ExecutionError::Connect { source })?;

        let result = Self::run_in_transaction(connection.as_mut(), statements).await;

        if let Err(err) = connection.close().await {
            tracing::warn!(error = ?err, error_msg = %err, "Failed to close database connection");
        }

        if result.is_ok() {
            tracing::info!("Provisioning transaction committed");
        }

        result
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
