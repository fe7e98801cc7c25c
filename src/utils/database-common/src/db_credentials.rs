// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::SecretString;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct DatabaseCredentials {
    pub user_name: String,
    pub password: SecretString,
}

impl DatabaseCredentials {
    pub fn new(user_name: impl Into<String>, password: SecretString) -> Self {
        Self {
            user_name: user_name.into(),
            password,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
