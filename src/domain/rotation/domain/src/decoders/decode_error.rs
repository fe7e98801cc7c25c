// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use policy_script::ScriptValueType;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Position inside a script result
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResultLocation {
    Result,
    Element(usize),
    Field { index: usize, field: &'static str },
}

impl fmt::Display for ResultLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Result => write!(f, "result"),
            Self::Element(index) => write!(f, "result[{index}]"),
            Self::Field { index, field } => write!(f, "result[{index}].{field}"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),

    #[error(transparent)]
    FieldMissing(#[from] FieldMissingError),
}

impl DecodeError {
    pub fn redact(self, secrets: &[&str]) -> Self {
        match self {
            Self::TypeMismatch(e) => Self::TypeMismatch(e.redact(secrets)),
            Self::FieldMissing(_) => self,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The offending value is rendered as truncated compact JSON
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "Expected {expected} at {location}, but got {actual} {}",
    render_value(.value)
)]
pub struct TypeMismatchError {
    pub location: ResultLocation,
    pub expected: &'static str,
    pub actual: ScriptValueType,
    pub value: serde_json::Value,
}

impl TypeMismatchError {
    pub(crate) fn at(
        location: ResultLocation,
        expected: &'static str,
        value: &serde_json::Value,
    ) -> Self {
        Self {
            location,
            expected,
            actual: ScriptValueType::of_json(value),
            value: value.clone(),
        }
    }

    /// Replaces every occurrence of the given secrets inside the offending
    /// value
    pub fn redact(mut self, secrets: &[&str]) -> Self {
        redact_value(&mut self.value, secrets);
        self
    }
}

pub const REDACTED: &str = "<redacted>";

const MAX_RENDERED_VALUE_CHARS: usize = 64;

fn render_value(value: &serde_json::Value) -> String {
    let rendered = value.to_string();
    match rendered.char_indices().nth(MAX_RENDERED_VALUE_CHARS) {
        Some((end, _)) => format!("{}...", &rendered[..end]),
        None => rendered,
    }
}

fn redact_value(value: &mut serde_json::Value, secrets: &[&str]) {
    match value {
        serde_json::Value::String(s) => {
            for secret in secrets.iter().filter(|secret| !secret.is_empty()) {
                if s.contains(secret) {
                    *s = s.replace(secret, REDACTED);
                }
            }
        }
        serde_json::Value::Array(items) => {
            items.iter_mut().for_each(|item| redact_value(item, secrets));
        }
        serde_json::Value::Object(fields) => {
            fields.values_mut().for_each(|field| redact_value(field, secrets));
        }
        serde_json::Value::Null | serde_json::Value::Bool(_) | serde_json::Value::Number(_) => {}
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Element result[{index}] is missing the required field '{field}'")]
pub struct FieldMissingError {
    pub index: usize,
    pub field: &'static str,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn expect_array<'a>(
    output: &'a policy_script::ScriptOutput,
) -> Result<&'a Vec<serde_json::Value>, TypeMismatchError> {
    match &output.value {
        serde_json::Value::Array(items) if output.value_type == ScriptValueType::Array => Ok(items),
        _ => Err(TypeMismatchError {
            location: ResultLocation::Result,
            expected: "array",
            actual: output.value_type.clone(),
            value: output.value.clone(),
        }),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
