// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use dbinit_rotation::*;
use dill::{Singleton, component, interface, scope};
use secrecy::{ExposeSecret, SecretString};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemorySecretStore {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    secrets: BTreeMap<String, SecretString>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn SecretStore)]
#[scope(Singleton)]
impl InMemorySecretStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .secrets
            .get(name)
            .map(|s| s.expose_secret().to_string())
    }

    /// Names in lexicographic order
    pub fn names(&self) -> Vec<String> {
        self.state.lock().unwrap().secrets.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl SecretStore for InMemorySecretStore {
    async fn create_secret(
        &self,
        name: &str,
        value: &SecretString,
    ) -> Result<(), CreateSecretError> {
        let mut guard = self.state.lock().unwrap();

        if guard.secrets.contains_key(name) {
            return Err(SecretAlreadyExistsError {
                name: name.to_string(),
            }
            .into());
        }

        guard.secrets.insert(name.to_string(), value.clone());
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
