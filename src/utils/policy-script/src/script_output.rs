// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use rhai::Dynamic;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptValueType {
    Unit,
    Bool,
    Int,
    Float,
    String,
    Char,
    Array,
    Map,
    Other(String),
}

impl ScriptValueType {
    pub(crate) fn of_dynamic(value: &Dynamic) -> Self {
        if value.is_unit() {
            Self::Unit
        } else if value.is_bool() {
            Self::Bool
        } else if value.is_int() {
            Self::Int
        } else if value.is_float() {
            Self::Float
        } else if value.is_string() {
            Self::String
        } else if value.is_char() {
            Self::Char
        } else if value.is_array() {
            Self::Array
        } else if value.is_map() {
            Self::Map
        } else {
            Self::Other(value.type_name().to_string())
        }
    }

    /// Type of a value nested inside a converted result, named the way
    /// scripts see it
    pub fn of_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Unit,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_f64() => Self::Float,
            Value::Number(_) => Self::Int,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Map,
        }
    }
}

impl fmt::Display for ScriptValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("unit"),
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::String => f.write_str("string"),
            Self::Char => f.write_str("char"),
            Self::Array => f.write_str("array"),
            Self::Map => f.write_str("map"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Value of the script's `result` variable along with the type it had inside
/// the script. Decoding into domain records is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptOutput {
    pub value_type: ScriptValueType,
    pub value: serde_json::Value,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
