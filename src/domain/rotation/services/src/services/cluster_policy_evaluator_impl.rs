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
use internal_error::ResultIntoInternal;
use policy_script::{PolicyScriptEngine, ScriptBindings, ScriptOutput};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn ClusterPolicyEvaluator)]
pub struct ClusterPolicyEvaluatorImpl {
    config: Arc<RotationConfig>,
}

impl ClusterPolicyEvaluatorImpl {
    /// Scripts are CPU-bound, so they run on the blocking pool and observe
    /// cancellation through the engine's progress hook
    async fn run_script(
        &self,
        kind: PolicyScriptKind,
        script: &str,
        bindings: ScriptBindings,
        ctx: &InvocationContext,
    ) -> Result<ScriptOutput, PolicyEvaluationError> {
        let engine = PolicyScriptEngine::new(self.config.script_limits);
        let script = script.to_string();
        let interrupt = ctx.script_interrupt();

        let output =
            tokio::task::spawn_blocking(move || engine.evaluate(&script, &bindings, &interrupt))
                .await
                .int_err()?
                .map_err(|e| PolicyEvaluationError::from_script_error(kind, e))?;

        tracing::debug!(
            script = %kind,
            result_type = %output.value_type,
            "Policy script evaluated"
        );

        Ok(output)
    }

    fn provisioning_bindings(cluster: &ClusterMetadata, passwords: &PasswordMap) -> ScriptBindings {
        ScriptBindings::cluster(cluster.as_json().clone()).with_passwords(passwords.to_secret_map())
    }
}

#[async_trait::async_trait]
impl ClusterPolicyEvaluator for ClusterPolicyEvaluatorImpl {
    #[tracing::instrument(level = "info", skip_all)]
    async fn evaluate_filter(
        &self,
        cluster: &ClusterMetadata,
        ctx: &InvocationContext,
    ) -> Result<FilterDecision, PolicyEvaluationError> {
        if self.config.filter_script.is_empty() {
            tracing::debug!("No filter script configured, cluster accepted");
            return Ok(FilterDecision::Proceed);
        }

        let output = self
            .run_script(
                PolicyScriptKind::Filter,
                &self.config.filter_script,
                ScriptBindings::cluster(cluster.as_json().clone()),
                ctx,
            )
            .await?;

        decode_filter_decision(&output).map_err(|source| PolicyEvaluationError::TypeMismatch {
            script: PolicyScriptKind::Filter,
            source,
        })
    }

    #[tracing::instrument(level = "info", skip_all, fields(users = passwords.len()))]
    async fn evaluate_statements(
        &self,
        cluster: &ClusterMetadata,
        passwords: &PasswordMap,
        ctx: &InvocationContext,
    ) -> Result<Vec<ProvisioningStatement>, PolicyEvaluationError> {
        if self.config.sql_script.is_empty() {
            tracing::debug!("No SQL script configured");
            return Ok(Vec::new());
        }

        let output = self
            .run_script(
                PolicyScriptKind::Sql,
                &self.config.sql_script,
                Self::provisioning_bindings(cluster, passwords),
                ctx,
            )
            .await?;

        decode_provisioning_statements(&output).map_err(|e| {
            PolicyEvaluationError::from_decode_error(
                PolicyScriptKind::Sql,
                e.redact(&passwords.exposed_secrets()),
            )
        })
    }

    #[tracing::instrument(level = "info", skip_all, fields(users = passwords.len()))]
    async fn evaluate_secrets(
        &self,
        cluster: &ClusterMetadata,
        passwords: &PasswordMap,
        ctx: &InvocationContext,
    ) -> Result<Vec<SecretRecord>, PolicyEvaluationError> {
        if self.config.secrets_script.is_empty() {
            tracing::debug!("No secrets script configured");
            return Ok(Vec::new());
        }

        let output = self
            .run_script(
                PolicyScriptKind::Secrets,
                &self.config.secrets_script,
                Self::provisioning_bindings(cluster, passwords),
                ctx,
            )
            .await?;

        decode_secret_records(&output).map_err(|e| {
            PolicyEvaluationError::from_decode_error(
                PolicyScriptKind::Secrets,
                e.redact(&passwords.exposed_secrets()),
            )
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
