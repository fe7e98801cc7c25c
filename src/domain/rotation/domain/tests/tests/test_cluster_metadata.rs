// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dbinit_rotation::*;
use pretty_assertions::assert_eq;
use serde_json::json;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_connection_settings() {
    let cluster = ClusterMetadata::new(json!({
        "DBClusterIdentifier": "orders",
        "Engine": "aurora-postgresql",
        "Endpoint": "orders.cluster-abc.eu-west-1.rds.amazonaws.com",
        "Port": 5432,
        "DatabaseName": "orders",
        "MasterUsername": "postgres",
    }));

    assert_eq!(cluster.identifier(), Some("orders"));
    assert_eq!(cluster.master_username(), Some("postgres"));
    assert_eq!(
        cluster.connection_settings().unwrap(),
        DatabaseConnectionSettings::new(
            DatabaseProvider::Postgres,
            "orders".to_string(),
            "orders.cluster-abc.eu-west-1.rds.amazonaws.com".to_string(),
            Some(5432),
        )
    );
}

#[test]
fn test_missing_attributes_default_to_empty() {
    let cluster = ClusterMetadata::new(json!({"Engine": "aurora-mysql"}));

    let settings = cluster.connection_settings().unwrap();
    assert_eq!(settings.provider, DatabaseProvider::MySql);
    assert_eq!(settings.database_name, "");
    assert_eq!(settings.host, "");
    assert_eq!(settings.port(), 3306);
}

#[test]
fn test_unsupported_engine() {
    let cluster = ClusterMetadata::new(json!({"Engine": "oracle-ee"}));
    assert_eq!(
        cluster.connection_settings(),
        Err(UnsupportedEngineError {
            engine: "oracle-ee".to_string()
        })
    );

    let cluster = ClusterMetadata::new(json!({}));
    assert!(cluster.connection_settings().is_err());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
