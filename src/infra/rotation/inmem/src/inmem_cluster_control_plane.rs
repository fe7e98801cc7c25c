// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dbinit_rotation::*;
use dill::{Singleton, component, interface, scope};
use internal_error::InternalError;
use secrecy::{ExposeSecret, SecretString};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Control plane backed by a list of registered cluster descriptions.
/// Registering the same identifier twice makes lookups ambiguous, which is
/// how tests exercise the "exactly one cluster" rule.
pub struct InMemoryClusterControlPlane {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    clusters: Vec<ClusterMetadata>,
    master_passwords: HashMap<String, SecretString>,
    master_password_changes: usize,
}

impl State {
    fn matching(&self, identifier: &str) -> impl Iterator<Item = &ClusterMetadata> {
        self.clusters
            .iter()
            .filter(move |c| c.identifier() == Some(identifier))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn ClusterControlPlane)]
#[scope(Singleton)]
impl InMemoryClusterControlPlane {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub fn add_cluster(&self, cluster: ClusterMetadata) {
        self.state.lock().unwrap().clusters.push(cluster);
    }

    pub fn master_password(&self, identifier: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .master_passwords
            .get(identifier)
            .map(|p| p.expose_secret().to_string())
    }

    pub fn master_password_changes(&self) -> usize {
        self.state.lock().unwrap().master_password_changes
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl ClusterControlPlane for InMemoryClusterControlPlane {
    async fn describe_clusters(
        &self,
        identifier: &ClusterIdentifier,
    ) -> Result<Vec<ClusterMetadata>, ControlPlaneError> {
        let guard = self.state.lock().unwrap();
        Ok(guard.matching(identifier.as_str()).cloned().collect())
    }

    async fn set_master_password(
        &self,
        identifier: &ClusterIdentifier,
        credential: &Credential,
    ) -> Result<(), ControlPlaneError> {
        let mut guard = self.state.lock().unwrap();

        if guard.matching(identifier.as_str()).next().is_none() {
            return InternalError::bail(format!("Cluster '{identifier}' not found"))
                .map_err(ControlPlaneError::Internal);
        }

        guard
            .master_passwords
            .insert(identifier.to_string(), credential.secret().clone());
        guard.master_password_changes += 1;

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
