// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use database_common::SqlArgument;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// SQL statement with positional arguments. Statement text frequently embeds
/// generated passwords, so `Debug` does not print it.
#[derive(Clone, PartialEq)]
pub struct ProvisioningStatement {
    pub sql: String,
    pub args: Vec<SqlArgument>,
}

impl ProvisioningStatement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(sql: impl Into<String>, args: Vec<SqlArgument>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }
}

impl fmt::Debug for ProvisioningStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisioningStatement")
            .field("sql_len", &self.sql.len())
            .field("args_len", &self.args.len())
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
