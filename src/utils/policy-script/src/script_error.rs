// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::ScriptValueType;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Script failed to compile: {message}")]
    Compile { message: String },

    #[error("Script failed: {message}")]
    Runtime { message: String },

    #[error("Script evaluation was cancelled")]
    Cancelled,

    #[error("Script evaluation deadline exceeded")]
    DeadlineExceeded,

    #[error("Script exceeded the limit of {limit} operations")]
    OperationLimitExceeded { limit: u64 },

    #[error("Script did not define the variable '{variable}'")]
    MissingResult { variable: &'static str },

    #[error("Script result of type {value_type} cannot be converted to data: {message}")]
    Unrepresentable {
        value_type: ScriptValueType,
        message: String,
    },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
