// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;
use std::time::Instant;

use secrecy::SecretString;
use tokio_util::sync::CancellationToken;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Host values exposed to a script as read-only constants
#[derive(Debug, Clone)]
pub struct ScriptBindings {
    pub cluster: serde_json::Value,
    pub passwords: Option<BTreeMap<String, SecretString>>,
}

impl ScriptBindings {
    pub fn cluster(cluster: serde_json::Value) -> Self {
        Self {
            cluster,
            passwords: None,
        }
    }

    pub fn with_passwords(self, passwords: BTreeMap<String, SecretString>) -> Self {
        Self {
            passwords: Some(passwords),
            ..self
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Signals that stop a running evaluation early
#[derive(Debug, Clone, Default)]
pub struct ScriptInterrupt {
    pub cancellation: CancellationToken,
    pub deadline: Option<Instant>,
}

impl ScriptInterrupt {
    pub fn new(cancellation: CancellationToken, deadline: Option<Instant>) -> Self {
        Self {
            cancellation,
            deadline,
        }
    }

    pub(crate) fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
