// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use policy_script::ScriptLimits;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_PROPAGATION_DELAY: Duration = Duration::from_secs(60);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct RotationConfig {
    /// Gate evaluated against the cluster description. Empty means always
    /// proceed.
    pub filter_script: String,

    /// Produces the provisioning statements. Empty means no statements.
    pub sql_script: String,

    /// Produces the secret records to publish. Empty means no secrets.
    pub secrets_script: String,

    /// One credential is generated per identifier and exposed to the
    /// provisioning scripts
    pub application_users: Vec<String>,

    /// Pause between changing the master password and connecting with it
    pub propagation_delay: Duration,

    pub script_limits: ScriptLimits,
}

impl RotationConfig {
    pub fn new(
        filter_script: impl Into<String>,
        sql_script: impl Into<String>,
        secrets_script: impl Into<String>,
        application_users: Vec<String>,
    ) -> Self {
        Self {
            filter_script: filter_script.into(),
            sql_script: sql_script.into(),
            secrets_script: secrets_script.into(),
            application_users,
            ..Self::default()
        }
    }

    pub fn with_propagation_delay(self, propagation_delay: Duration) -> Self {
        Self {
            propagation_delay,
            ..self
        }
    }

    pub fn with_script_limits(self, script_limits: ScriptLimits) -> Self {
        Self {
            script_limits,
            ..self
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            filter_script: String::new(),
            sql_script: String::new(),
            secrets_script: String::new(),
            application_users: Vec::new(),
            propagation_delay: DEFAULT_PROPAGATION_DELAY,
            script_limits: ScriptLimits::default(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
