// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dbinit_rotation::*;
use dill::{component, interface};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const PROPAGATION_STAGE: &str = "waiting for the master password to propagate";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn RotateClusterCredentialsUseCase)]
pub struct RotateClusterCredentialsUseCaseImpl {
    config: Arc<RotationConfig>,
    control_plane: Arc<dyn ClusterControlPlane>,
    credential_generator: Arc<dyn CredentialGenerator>,
    policy_evaluator: Arc<dyn ClusterPolicyEvaluator>,
    sql_runner: Arc<dyn ProvisioningSqlRunner>,
    secret_publisher: Arc<dyn SecretPublisher>,
}

impl RotateClusterCredentialsUseCaseImpl {
    async fn describe_single_cluster(
        &self,
        identifier: &ClusterIdentifier,
    ) -> Result<ClusterMetadata, RotateClusterCredentialsError> {
        let mut clusters = self
            .control_plane
            .describe_clusters(identifier)
            .await
            .map_err(|e| {
                RotateClusterCredentialsError::control_plane(
                    ControlPlaneOperation::DescribeClusters,
                    e,
                )
            })?;

        match clusters.len() {
            1 => Ok(clusters.swap_remove(0)),
            found => Err(ClusterLookupError {
                identifier: identifier.to_string(),
                found,
            }
            .into()),
        }
    }

    fn generate_application_passwords(&self) -> Result<PasswordMap, GenerationError> {
        let mut passwords = PasswordMap::new();
        for user in &self.config.application_users {
            if passwords.contains(user) {
                tracing::warn!(%user, "Application user is listed more than once, ignoring");
                continue;
            }
            passwords.insert(user.clone(), self.credential_generator.generate()?);
        }
        Ok(passwords)
    }

    async fn wait_for_propagation(&self, ctx: &InvocationContext) -> Result<(), CancelledError> {
        tracing::info!(
            delay = ?self.config.propagation_delay,
            "Waiting for the master password change to propagate"
        );

        tokio::select! {
            biased;
            cause = ctx.interrupted() => Err(CancelledError {
                stage: PROPAGATION_STAGE,
                cause,
            }),
            () = tokio::time::sleep(self.config.propagation_delay) => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl RotateClusterCredentialsUseCase for RotateClusterCredentialsUseCaseImpl {
    #[tracing::instrument(level = "info", skip_all, fields(cluster_identifier))]
    async fn execute(
        &self,
        event: &ClusterCreatedEvent,
        ctx: &InvocationContext,
    ) -> Result<RotationOutcome, RotateClusterCredentialsError> {
        let identifier = event.cluster_identifier()?;
        tracing::Span::current().record("cluster_identifier", identifier.as_str());

        let cluster = self.describe_single_cluster(&identifier).await?;

        if self.policy_evaluator.evaluate_filter(&cluster, ctx).await? == FilterDecision::Skip {
            tracing::info!("Cluster rejected by the filter script, skipping");
            return Ok(RotationOutcome::Skipped);
        }

        let settings = cluster.connection_settings()?;

        let master_credential = self.credential_generator.generate()?;
        self.control_plane
            .set_master_password(&identifier, &master_credential)
            .await
            .map_err(|e| {
                RotateClusterCredentialsError::control_plane(
                    ControlPlaneOperation::SetMasterPassword,
                    e,
                )
            })?;
        tracing::info!("Master password replaced with a generated one");

        self.wait_for_propagation(ctx).await?;

        let passwords = self.generate_application_passwords()?;
        let statements = self
            .policy_evaluator
            .evaluate_statements(&cluster, &passwords, ctx)
            .await?;
        let secrets = self
            .policy_evaluator
            .evaluate_secrets(&cluster, &passwords, ctx)
            .await?;

        let credentials = DatabaseCredentials::new(
            cluster.master_username().unwrap_or_default(),
            master_credential.secret().clone(),
        );
        self.sql_runner
            .run(&settings, &credentials, &statements)
            .await?;

        self.secret_publisher.publish(&secrets).await?;

        tracing::info!(
            statements_executed = statements.len(),
            secrets_published = secrets.len(),
            "Cluster provisioned"
        );

        Ok(RotationOutcome::Completed {
            statements_executed: statements.len(),
            secrets_published: secrets.len(),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
