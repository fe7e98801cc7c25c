// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves region and credentials from the standard environment provider
/// chain. The region falls back to a placeholder so that a missing region
/// surfaces as a request error rather than a panic.
pub async fn load_aws_sdk_config() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else("unspecified");

    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
