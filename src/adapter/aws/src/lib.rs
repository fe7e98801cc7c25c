// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod aws_sdk_config;
mod dependencies;
mod rds_cluster_control_plane;
mod rds_cluster_description;
mod secrets_manager_secret_store;

pub use aws_sdk_config::*;
pub use dependencies::*;
pub use rds_cluster_control_plane::*;
pub use rds_cluster_description::*;
pub use secrets_manager_secret_store::*;
