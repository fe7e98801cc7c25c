// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dbinit_rotation::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_parses_source_identifier() {
    let event = ClusterCreatedEvent::from_slice(
        br#"{
            "version": "0",
            "detail-type": "RDS DB Cluster Event",
            "source": "aws.rds",
            "detail": {
                "EventCategories": ["creation"],
                "SourceType": "CLUSTER",
                "SourceIdentifier": "orders-db",
                "EventID": "RDS-EVENT-0170"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(
        event.cluster_identifier().unwrap(),
        ClusterIdentifier::try_new("orders-db").unwrap()
    );
}

#[test]
fn test_invalid_json_is_malformed() {
    assert!(ClusterCreatedEvent::from_slice(b"{not json").is_err());
}

#[test]
fn test_missing_identifier_is_malformed() {
    let event = ClusterCreatedEvent::from_slice(br#"{"detail": {}}"#).unwrap();
    assert_eq!(
        event.cluster_identifier(),
        Err(MalformedEventError::new(
            "the field detail.SourceIdentifier is missing"
        ))
    );

    let event = ClusterCreatedEvent::from_slice(br#"{"source": "aws.rds"}"#).unwrap();
    assert!(event.cluster_identifier().is_err());
}

#[test]
fn test_non_string_identifier_is_malformed() {
    let event =
        ClusterCreatedEvent::from_slice(br#"{"detail": {"SourceIdentifier": 42}}"#).unwrap();
    assert_eq!(
        event.cluster_identifier(),
        Err(MalformedEventError::new(
            "the field detail.SourceIdentifier is not a string"
        ))
    );
}

#[test]
fn test_empty_identifier_is_malformed() {
    let event = ClusterCreatedEvent::from_source_identifier("");
    assert!(event.cluster_identifier().is_err());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
