// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DatabaseProvider {
    Postgres,
    MySql,
}

impl DatabaseProvider {
    /// Maps a managed-database engine name (e.g. `aurora-postgresql`) to the
    /// driver used to talk to it. Matching is a case-sensitive substring test.
    pub fn from_engine(engine: &str) -> Result<Self, UnsupportedEngineError> {
        if engine.contains("postgresql") {
            Ok(Self::Postgres)
        } else if engine.contains("mysql") {
            Ok(Self::MySql)
        } else {
            Err(UnsupportedEngineError {
                engine: engine.to_string(),
            })
        }
    }

    pub fn driver(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
        }
    }

    pub fn default_port(&self) -> u32 {
        match self {
            Self::Postgres => 5432,
            Self::MySql => 3306,
        }
    }
}

impl fmt::Display for DatabaseProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.driver())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported database engine: {engine}")]
pub struct UnsupportedEngineError {
    pub engine: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
