// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Generated password. Redacted in `Debug` output and never logged.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential {
    pub fn new(secret: SecretString) -> Self {
        Self(secret)
    }

    pub fn secret(&self) -> &SecretString {
        &self.0
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Credentials generated for application users, keyed by user identifier
#[derive(Debug, Clone, Default)]
pub struct PasswordMap(BTreeMap<String, Credential>);

impl PasswordMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: impl Into<String>, credential: Credential) {
        self.0.insert(user.into(), credential);
    }

    pub fn get(&self, user: &str) -> Option<&Credential> {
        self.0.get(user)
    }

    pub fn contains(&self, user: &str) -> bool {
        self.0.contains_key(user)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Plain text of every credential, for scrubbing them out of diagnostics
    pub fn exposed_secrets(&self) -> Vec<&str> {
        self.0.values().map(Credential::expose).collect()
    }

    pub fn to_secret_map(&self) -> BTreeMap<String, SecretString> {
        self.0
            .iter()
            .map(|(user, credential)| (user.clone(), credential.secret().clone()))
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
