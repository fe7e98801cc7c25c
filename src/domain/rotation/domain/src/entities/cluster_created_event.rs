// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Deserialize;

use crate::{ClusterIdentifier, MalformedEventError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Notification emitted when a managed database cluster is created.
///
/// Only `detail.SourceIdentifier` is consumed, everything else in the
/// envelope is ignored. The detail is kept as raw JSON so that a missing or
/// non-string identifier is reported as a malformed event rather than a
/// parsing failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClusterCreatedEvent {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ClusterCreatedEvent {
    pub fn from_source_identifier(identifier: impl Into<String>) -> Self {
        Self {
            detail: serde_json::json!({ "SourceIdentifier": identifier.into() }),
        }
    }

    pub fn from_slice(payload: &[u8]) -> Result<Self, MalformedEventError> {
        serde_json::from_slice(payload)
            .map_err(|e| MalformedEventError::new(format!("invalid event JSON: {e}")))
    }

    pub fn cluster_identifier(&self) -> Result<ClusterIdentifier, MalformedEventError> {
        match self.detail.get("SourceIdentifier") {
            Some(serde_json::Value::String(identifier)) => ClusterIdentifier::try_new(identifier),
            Some(_) => Err(MalformedEventError::new(
                "the field detail.SourceIdentifier is not a string",
            )),
            None => Err(MalformedEventError::new(
                "the field detail.SourceIdentifier is missing",
            )),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
