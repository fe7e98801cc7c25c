// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::{CreateSecretError, SecretRecord};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Creates one secret store entry per record, in order. Stops at the first
/// failure. Entries created before it are left in place.
#[async_trait::async_trait]
pub trait SecretPublisher: Send + Sync {
    async fn publish(&self, records: &[SecretRecord]) -> Result<(), PublishError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Failed to publish secret '{name}' after {published} secret(s) were published")]
pub struct PublishError {
    pub name: String,
    pub published: usize,
    #[source]
    pub source: CreateSecretError,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
