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
use aws_sdk_rds::Client;
use dbinit_rotation::*;
use dill::{Singleton, component, interface, scope};
use internal_error::{ErrorIntoInternal, ResultIntoInternal};
use secrecy::ExposeSecret;

use crate::cluster_metadata_from_rds;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct RdsClusterControlPlane {
    client: Client,
}

#[component(pub)]
#[interface(dyn ClusterControlPlane)]
#[scope(Singleton)]
impl RdsClusterControlPlane {
    pub fn new(sdk_config: Arc<SdkConfig>) -> Self {
        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait::async_trait]
impl ClusterControlPlane for RdsClusterControlPlane {
    #[tracing::instrument(level = "debug", skip_all, fields(%identifier))]
    async fn describe_clusters(
        &self,
        identifier: &ClusterIdentifier,
    ) -> Result<Vec<ClusterMetadata>, ControlPlaneError> {
        let response = self
            .client
            .describe_db_clusters()
            .db_cluster_identifier(identifier.as_str())
            .send()
            .await;

        match response {
            Ok(output) => Ok(output
                .db_clusters()
                .iter()
                .map(cluster_metadata_from_rds)
                .collect()),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_db_cluster_not_found_fault()) =>
            {
                tracing::debug!("Cluster not found");
                Ok(Vec::new())
            }
            Err(err) => Err(ControlPlaneError::Internal(err.int_err())),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%identifier))]
    async fn set_master_password(
        &self,
        identifier: &ClusterIdentifier,
        credential: &Credential,
    ) -> Result<(), ControlPlaneError> {
        self.client
            .modify_db_cluster()
            .db_cluster_identifier(identifier.as_str())
            .master_user_password(credential.secret().expose_secret())
            .apply_immediately(true)
            .send()
            .await
            .int_err()?;

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

