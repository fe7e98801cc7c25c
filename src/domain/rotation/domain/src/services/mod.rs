// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod cluster_control_plane;
mod cluster_policy_evaluator;
mod credential_generator;
mod provisioning_sql_runner;
mod secret_publisher;
mod secret_store;

pub use cluster_control_plane::*;
pub use cluster_policy_evaluator::*;
pub use credential_generator::*;
pub use provisioning_sql_runner::*;
pub use secret_publisher::*;
pub use secret_store::*;
