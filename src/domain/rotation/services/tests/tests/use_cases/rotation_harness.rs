// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use database_common::DatabaseConnector;
use database_common::testing::FakeDatabaseConnector;
use dbinit_rotation::*;
use dbinit_rotation_inmem::{InMemoryClusterControlPlane, InMemorySecretStore};
use dbinit_rotation_services::*;
use dill::{Catalog, CatalogBuilder};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) const CLUSTER_ID: &str = "orders";

pub(crate) const FILTER_SCRIPT: &str = r#"
    let result = cluster.TagList.some(|tag| tag.Key == "dbinit" && tag.Value == "enabled");
"#;

pub(crate) const SQL_SCRIPT: &str = r#"
    let result = [];
    for user in passwords.keys() {
        result.push(`CREATE USER ${user} WITH PASSWORD '${passwords[user]}'`);
        result.push("GRANT CONNECT ON DATABASE " + cluster.DatabaseName + " TO " + user);
    }
"#;

pub(crate) const SECRETS_SCRIPT: &str = r#"
    let result = [];
    for user in passwords.keys() {
        result.push(#{ name: cluster.DBClusterIdentifier + "/" + user, secret: passwords[user] });
    }
"#;

pub(crate) fn cluster_metadata(engine: &str, enabled: bool) -> ClusterMetadata {
    let tag_value = if enabled { "enabled" } else { "disabled" };
    ClusterMetadata::new(serde_json::json!({
        "DBClusterIdentifier": CLUSTER_ID,
        "Engine": engine,
        "Endpoint": "orders.cluster.local",
        "Port": 5432,
        "DatabaseName": "orders",
        "MasterUsername": "admin",
        "TagList": [{ "Key": "dbinit", "Value": tag_value }],
    }))
}

pub(crate) fn default_config() -> RotationConfig {
    RotationConfig::new(
        FILTER_SCRIPT,
        SQL_SCRIPT,
        SECRETS_SCRIPT,
        vec!["app".to_string(), "reporting".to_string()],
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub(crate) struct RotationHarnessOverrides {
    pub database: FakeDatabaseConnector,
    pub mock_control_plane: Option<MockClusterControlPlane>,
    pub mock_credential_generator: Option<MockCredentialGenerator>,
}

pub(crate) struct RotationHarness {
    catalog: Catalog,
    pub database: FakeDatabaseConnector,
    pub use_case: Arc<dyn RotateClusterCredentialsUseCase>,
}

impl RotationHarness {
    pub(crate) fn new(config: RotationConfig) -> Self {
        Self::with_overrides(config, RotationHarnessOverrides::default())
    }

    pub(crate) fn with_overrides(
        config: RotationConfig,
        overrides: RotationHarnessOverrides,
    ) -> Self {
        let mut b = CatalogBuilder::new();
        b.add_value(config)
            .add::<InMemorySecretStore>()
            .add::<ClusterPolicyEvaluatorImpl>()
            .add::<ProvisioningSqlRunnerImpl>()
            .add::<SecretPublisherImpl>()
            .add::<RotateClusterCredentialsUseCaseImpl>()
            .add_value(overrides.database.clone())
            .bind::<dyn DatabaseConnector, FakeDatabaseConnector>();

        match overrides.mock_control_plane {
            Some(mock) => {
                b.add_value(mock)
                    .bind::<dyn ClusterControlPlane, MockClusterControlPlane>();
            }
            None => {
                b.add::<InMemoryClusterControlPlane>();
            }
        }

        match overrides.mock_credential_generator {
            Some(mock) => {
                b.add_value(mock)
                    .bind::<dyn CredentialGenerator, MockCredentialGenerator>();
            }
            None => {
                b.add::<CredentialGeneratorImpl>();
            }
        }

        let catalog = b.build();

        Self {
            use_case: catalog.get_one().unwrap(),
            database: overrides.database,
            catalog,
        }
    }

    pub(crate) fn control_plane(&self) -> Arc<InMemoryClusterControlPlane> {
        self.catalog.get_one().unwrap()
    }

    pub(crate) fn secret_store(&self) -> Arc<InMemorySecretStore> {
        self.catalog.get_one().unwrap()
    }

    pub(crate) fn add_cluster(&self, cluster: ClusterMetadata) {
        self.control_plane().add_cluster(cluster);
    }

    pub(crate) async fn rotate(
        &self,
        ctx: &InvocationContext,
    ) -> Result<RotationOutcome, RotateClusterCredentialsError> {
        self.use_case
            .execute(&ClusterCreatedEvent::from_source_identifier(CLUSTER_ID), ctx)
            .await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
