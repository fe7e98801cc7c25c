// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use aws_config::SdkConfig;
use aws_sdk_secretsmanager::Client;
use dbinit_rotation::{CreateSecretError, SecretAlreadyExistsError, SecretStore};
use dill::{Singleton, component, interface, scope};
use internal_error::ErrorIntoInternal;
use secrecy::{ExposeSecret, SecretString};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct SecretsManagerSecretStore {
    client: Client,
}

#[component(pub)]
#[interface(dyn SecretStore)]
#[scope(Singleton)]
impl SecretsManagerSecretStore {
    pub fn new(sdk_config: Arc<SdkConfig>) -> Self {
        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait::async_trait]
impl SecretStore for SecretsManagerSecretStore {
    #[tracing::instrument(level = "debug", skip_all, fields(%name))]
    async fn create_secret(
        &self,
        name: &str,
        value: &SecretString,
    ) -> Result<(), CreateSecretError> {
        let response = self
            .client
            .create_secret()
            .name(name)
            .secret_string(value.expose_secret())
            .send()
            .await;

        match response {
            Ok(_) => Ok(()),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_exists_exception()) =>
            {
                Err(SecretAlreadyExistsError {
                    name: name.to_string(),
                }
                .into())
            }
            Err(err) => Err(CreateSecretError::Internal(err.int_err())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
