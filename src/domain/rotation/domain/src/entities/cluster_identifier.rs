// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterIdentifier(String);

impl ClusterIdentifier {
    pub fn try_new(value: impl Into<String>) -> Result<Self, MalformedEventError> {
        let value = value.into();
        if value.is_empty() {
            return Err(MalformedEventError::new(
                "the field detail.SourceIdentifier is empty",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClusterIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed cluster creation event: {reason}")]
pub struct MalformedEventError {
    pub reason: String,
}

impl MalformedEventError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
