// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod cluster_policy_evaluator_impl;
mod credential_generator_impl;
mod provisioning_sql_runner_impl;
mod secret_publisher_impl;

pub use cluster_policy_evaluator_impl::*;
pub use credential_generator_impl::*;
pub use provisioning_sql_runner_impl::*;
pub use secret_publisher_impl::*;
