// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use policy_script::{ScriptOutput, ScriptValueType};
use serde_json::Value;

use super::decode_error::expect_array;
use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const NAME_FIELD: &str = "name";
const SECRET_FIELD: &str = "secret";

/// Decodes an array of `#{name: "...", secret: ...}` maps. A string secret is
/// taken verbatim, any other value is stored as its compact JSON text.
pub fn decode_secret_records(output: &ScriptOutput) -> Result<Vec<SecretRecord>, DecodeError> {
    expect_array(output)?
        .iter()
        .enumerate()
        .map(|(index, element)| decode_secret_record(index, element))
        .collect()
}

fn decode_secret_record(index: usize, element: &Value) -> Result<SecretRecord, DecodeError> {
    let Value::Object(fields) = element else {
        return Err(TypeMismatchError {
            location: ResultLocation::Element(index),
            expected: "map",
            actual: ScriptValueType::of_json(element),
            value: element.clone(),
        }
        .into());
    };

    let name = match fields.get(NAME_FIELD) {
        Some(Value::String(name)) => name.clone(),
        Some(other) => {
            return Err(TypeMismatchError::at(
                ResultLocation::Field {
                    index,
                    field: NAME_FIELD,
                },
                "string",
                other,
            )
            .into());
        }
        None => {
            return Err(FieldMissingError {
                index,
                field: NAME_FIELD,
            }
            .into());
        }
    };

    let value = match fields.get(SECRET_FIELD) {
        Some(Value::String(secret)) => secret.clone(),
        Some(other) => other.to_string(),
        None => {
            return Err(FieldMissingError {
                index,
                field: SECRET_FIELD,
            }
            .into());
        }
    };

    Ok(SecretRecord::new(name, value))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
