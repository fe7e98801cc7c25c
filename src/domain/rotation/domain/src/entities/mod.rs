// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod cluster_created_event;
mod cluster_identifier;
mod cluster_metadata;
mod credential;
mod provisioning_statement;
mod secret_record;

pub use cluster_created_event::*;
pub use cluster_identifier::*;
pub use cluster_metadata::*;
pub use credential::*;
pub use provisioning_statement::*;
pub use secret_record::*;
