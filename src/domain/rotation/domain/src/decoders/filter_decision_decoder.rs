// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use policy_script::{ScriptOutput, ScriptValueType};

use crate::{ResultLocation, TypeMismatchError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    Proceed,
    Skip,
}

/// Requires a boolean result. No truthiness coercion is applied.
pub fn decode_filter_decision(output: &ScriptOutput) -> Result<FilterDecision, TypeMismatchError> {
    match (&output.value_type, &output.value) {
        (ScriptValueType::Bool, serde_json::Value::Bool(true)) => Ok(FilterDecision::Proceed),
        (ScriptValueType::Bool, serde_json::Value::Bool(false)) => Ok(FilterDecision::Skip),
        _ => Err(TypeMismatchError {
            location: ResultLocation::Result,
            expected: "bool",
            actual: output.value_type.clone(),
            value: output.value.clone(),
        }),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
