// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use secrecy::SecretString;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait SecretStore: Send + Sync {
    /// Creates a new secret. Existing secrets are never overwritten.
    async fn create_secret(&self, name: &str, value: &SecretString)
    -> Result<(), CreateSecretError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum CreateSecretError {
    #[error(transparent)]
    AlreadyExists(#[from] SecretAlreadyExistsError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Secret '{name}' already exists")]
pub struct SecretAlreadyExistsError {
    pub name: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
