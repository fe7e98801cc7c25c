// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod policy_script_engine;
mod script_bindings;
mod script_error;
mod script_limits;
mod script_output;

pub use policy_script_engine::*;
pub use script_bindings::*;
pub use script_error::*;
pub use script_limits::*;
pub use script_output::*;
