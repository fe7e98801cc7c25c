// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use database_common::SqlArgument;
use policy_script::ScriptOutput;
use serde_json::Value;

use super::decode_error::expect_array;
use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const QUERY_FIELD: &str = "query";
const ARGS_FIELD: &str = "args";

/// Decodes an array whose elements are either plain SQL strings or maps of
/// the form `#{query: "...", args: [...]}`. Element order is preserved.
pub fn decode_provisioning_statements(
    output: &ScriptOutput,
) -> Result<Vec<ProvisioningStatement>, DecodeError> {
    expect_array(output)?
        .iter()
        .enumerate()
        .map(|(index, element)| decode_statement(index, element))
        .collect()
}

fn decode_statement(index: usize, element: &Value) -> Result<ProvisioningStatement, DecodeError> {
    let fields = match element {
        Value::String(sql) => return Ok(ProvisioningStatement::new(sql.clone())),
        Value::Object(fields) => fields,
        _ => {
            return Err(TypeMismatchError::at(
                ResultLocation::Element(index),
                "string or map",
                element,
            )
            .into());
        }
    };

    let sql = match fields.get(QUERY_FIELD) {
        Some(Value::String(sql)) => sql.clone(),
        Some(other) => {
            return Err(TypeMismatchError::at(
                ResultLocation::Field {
                    index,
                    field: QUERY_FIELD,
                },
                "string",
                other,
            )
            .into());
        }
        None => {
            return Err(FieldMissingError {
                index,
                field: QUERY_FIELD,
            }
            .into());
        }
    };

    let args = match fields.get(ARGS_FIELD) {
        None => Vec::new(),
        Some(Value::Array(args)) => args.iter().cloned().map(SqlArgument::from).collect(),
        Some(other) => {
            return Err(TypeMismatchError::at(
                ResultLocation::Field {
                    index,
                    field: ARGS_FIELD,
                },
                "array",
                other,
            )
            .into());
        }
    };

    Ok(ProvisioningStatement::with_args(sql, args))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
