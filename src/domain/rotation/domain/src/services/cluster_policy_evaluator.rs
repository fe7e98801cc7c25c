// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use internal_error::InternalError;
use policy_script::ScriptError;
use thiserror::Error;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Runs the configured policy scripts and decodes their results.
///
/// An empty script is never evaluated: the filter then permits every cluster
/// and provisioning produces nothing.
#[async_trait::async_trait]
pub trait ClusterPolicyEvaluator: Send + Sync {
    async fn evaluate_filter(
        &self,
        cluster: &ClusterMetadata,
        ctx: &InvocationContext,
    ) -> Result<FilterDecision, PolicyEvaluationError>;

    async fn evaluate_statements(
        &self,
        cluster: &ClusterMetadata,
        passwords: &PasswordMap,
        ctx: &InvocationContext,
    ) -> Result<Vec<ProvisioningStatement>, PolicyEvaluationError>;

    async fn evaluate_secrets(
        &self,
        cluster: &ClusterMetadata,
        passwords: &PasswordMap,
        ctx: &InvocationContext,
    ) -> Result<Vec<SecretRecord>, PolicyEvaluationError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PolicyScriptKind {
    Filter,
    Sql,
    Secrets,
}

impl fmt::Display for PolicyScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter => f.write_str("filter"),
            Self::Sql => f.write_str("SQL"),
            Self::Secrets => f.write_str("secrets"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum PolicyEvaluationError {
    #[error("Evaluation of the {script} script failed")]
    Evaluation {
        script: PolicyScriptKind,
        #[source]
        source: ScriptError,
    },

    #[error("The {script} script did not define the 'result' variable")]
    MissingResult { script: PolicyScriptKind },

    #[error("The {script} script produced a value of unexpected type")]
    TypeMismatch {
        script: PolicyScriptKind,
        #[source]
        source: TypeMismatchError,
    },

    #[error("The {script} script produced an incomplete record")]
    FieldMissing {
        script: PolicyScriptKind,
        #[source]
        source: FieldMissingError,
    },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl PolicyEvaluationError {
    pub fn from_script_error(script: PolicyScriptKind, error: ScriptError) -> Self {
        match error {
            ScriptError::MissingResult { .. } => Self::MissingResult { script },
            source => Self::Evaluation { script, source },
        }
    }

    pub fn from_decode_error(script: PolicyScriptKind, error: DecodeError) -> Self {
        match error {
            DecodeError::TypeMismatch(source) => Self::TypeMismatch { script, source },
            DecodeError::FieldMissing(source) => Self::FieldMissing { script, source },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
