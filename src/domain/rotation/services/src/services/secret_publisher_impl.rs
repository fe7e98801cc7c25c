// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dbinit_rotation::*;
use dill::{component, interface};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn SecretPublisher)]
pub struct SecretPublisherImpl {
    secret_store: Arc<dyn SecretStore>,
}

#[async_trait::async_trait]
impl SecretPublisher for SecretPublisherImpl {
    #[tracing::instrument(level = "info", skip_all, fields(num_secrets = records.len()))]
    async fn publish(&self, records: &[SecretRecord]) -> Result<(), PublishError> {
        for (published, record) in records.iter().enumerate() {
            self.secret_store
                .create_secret(&record.name, &record.value)
                .await
                .map_err(|source| PublishError {
                    name: record.name.clone(),
                    published,
                    source,
                })?;

            tracing::info!(secret_name = %record.name, "Secret published");
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
