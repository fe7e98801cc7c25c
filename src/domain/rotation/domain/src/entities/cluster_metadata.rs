// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use database_common::{DatabaseConnectionSettings, DatabaseProvider, UnsupportedEngineError};
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Free-form description of a managed cluster as reported by the control
/// plane, using its attribute names (`Engine`, `Endpoint`, `Port`, ...).
///
/// Scripts see the whole document. The typed accessors below cover only the
/// fields needed to reach the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterMetadata(serde_json::Value);

impl ClusterMetadata {
    pub const IDENTIFIER: &'static str = "DBClusterIdentifier";
    pub const ENGINE: &'static str = "Engine";
    pub const ENDPOINT: &'static str = "Endpoint";
    pub const PORT: &'static str = "Port";
    pub const DATABASE_NAME: &'static str = "DatabaseName";
    pub const MASTER_USERNAME: &'static str = "MasterUsername";

    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_json(self) -> serde_json::Value {
        self.0
    }

    fn str_field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(serde_json::Value::as_str)
    }

    pub fn identifier(&self) -> Option<&str> {
        self.str_field(Self::IDENTIFIER)
    }

    pub fn engine(&self) -> Option<&str> {
        self.str_field(Self::ENGINE)
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.str_field(Self::ENDPOINT)
    }

    pub fn port(&self) -> Option<u32> {
        self.0
            .get(Self::PORT)
            .and_then(serde_json::Value::as_u64)
            .and_then(|p| u32::try_from(p).ok())
    }

    pub fn database_name(&self) -> Option<&str> {
        self.str_field(Self::DATABASE_NAME)
    }

    pub fn master_username(&self) -> Option<&str> {
        self.str_field(Self::MASTER_USERNAME)
    }

    /// Resolves the driver from the engine name and collects the endpoint.
    /// Absent string attributes are treated as empty.
    pub fn connection_settings(
        &self,
    ) -> Result<DatabaseConnectionSettings, UnsupportedEngineError> {
        let provider = DatabaseProvider::from_engine(self.engine().unwrap_or_default())?;

        Ok(DatabaseConnectionSettings::new(
            provider,
            self.database_name().unwrap_or_default().to_string(),
            self.endpoint().unwrap_or_default().to_string(),
            self.port(),
        ))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
