// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

// Re-exports
pub use database_common::{
    DatabaseConnectionSettings, DatabaseCredentials, DatabaseProvider, SqlArgument,
    UnsupportedEngineError,
};
pub use policy_script::{ScriptError, ScriptLimits, ScriptValueType};

mod decoders;
mod entities;
mod invocation_context;
mod rotation_config;
mod services;
mod use_cases;

pub use decoders::*;
pub use entities::*;
pub use invocation_context::*;
pub use rotation_config::*;
pub use services::*;
pub use use_cases::*;
