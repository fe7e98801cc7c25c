// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use thiserror::Error;

use crate::{ClusterIdentifier, ClusterMetadata, Credential};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Management API of the managed database service
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait ClusterControlPlane: Send + Sync {
    /// Lists clusters matching the identifier. An unknown identifier yields an
    /// empty list rather than an error.
    async fn describe_clusters(
        &self,
        identifier: &ClusterIdentifier,
    ) -> Result<Vec<ClusterMetadata>, ControlPlaneError>;

    /// Replaces the master password, applying the change immediately
    async fn set_master_password(
        &self,
        identifier: &ClusterIdentifier,
        credential: &Credential,
    ) -> Result<(), ControlPlaneError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum ControlPlaneError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
