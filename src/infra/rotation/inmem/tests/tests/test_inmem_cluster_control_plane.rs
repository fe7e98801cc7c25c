// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dbinit_rotation::*;
use dbinit_rotation_inmem::InMemoryClusterControlPlane;
use pretty_assertions::assert_eq;
use secrecy::SecretString;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn cluster(identifier: &str, engine: &str) -> ClusterMetadata {
    ClusterMetadata::new(serde_json::json!({
        "DBClusterIdentifier": identifier,
        "Engine": engine,
    }))
}

fn id(value: &str) -> ClusterIdentifier {
    ClusterIdentifier::try_new(value).unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_describe_unknown_cluster_is_empty() {
    let control_plane = InMemoryClusterControlPlane::new();
    control_plane.add_cluster(cluster("foo", "aurora-postgresql"));

    let clusters = control_plane.describe_clusters(&id("bar")).await.unwrap();

    assert!(clusters.is_empty());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_describe_returns_all_matches() {
    let control_plane = InMemoryClusterControlPlane::new();
    control_plane.add_cluster(cluster("foo", "aurora-postgresql"));
    control_plane.add_cluster(cluster("bar", "aurora-mysql"));
    control_plane.add_cluster(cluster("foo", "aurora-mysql"));

    let clusters = control_plane.describe_clusters(&id("foo")).await.unwrap();

    assert_eq!(
        clusters.iter().map(|c| c.engine()).collect::<Vec<_>>(),
        vec![Some("aurora-postgresql"), Some("aurora-mysql")]
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_set_master_password_records_the_change() {
    let control_plane = InMemoryClusterControlPlane::new();
    control_plane.add_cluster(cluster("foo", "aurora-postgresql"));

    control_plane
        .set_master_password(&id("foo"), &Credential::new(SecretString::from("s3cr3t")))
        .await
        .unwrap();

    assert_eq!(control_plane.master_password("foo").as_deref(), Some("s3cr3t"));
    assert_eq!(control_plane.master_password_changes(), 1);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_set_master_password_of_unknown_cluster_fails() {
    let control_plane = InMemoryClusterControlPlane::new();

    let res = control_plane
        .set_master_password(&id("foo"), &Credential::new(SecretString::from("s3cr3t")))
        .await;

    assert!(matches!(res, Err(ControlPlaneError::Internal(_))));
    assert_eq!(control_plane.master_password_changes(), 0);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
