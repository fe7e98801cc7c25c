// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod db_connection;
mod db_connection_settings;
mod db_credentials;
mod db_error;
mod db_provider;
mod plugins;
mod sql_argument;

#[cfg(any(feature = "testing", test))]
pub mod testing;

pub use db_connection::*;
pub use db_connection_settings::*;
pub use db_credentials::*;
pub use db_error::*;
pub use db_provider::*;
pub use plugins::*;
pub use sql_argument::*;
