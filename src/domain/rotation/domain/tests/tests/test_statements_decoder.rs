// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dbinit_rotation::*;
use policy_script::ScriptOutput;
use pretty_assertions::assert_eq;
use serde_json::json;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn array(value: serde_json::Value) -> ScriptOutput {
    ScriptOutput {
        value_type: ScriptValueType::Array,
        value,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_plain_and_parametrized_statements() {
    let statements = decode_provisioning_statements(&array(json!([
        "CREATE ROLE x",
        {"query": "ALTER DATABASE y OWNER TO x", "args": ["a"]},
        {"query": "GRANT ALL ON SCHEMA public TO x"},
    ])))
    .unwrap();

    assert_eq!(
        statements,
        vec![
            ProvisioningStatement::new("CREATE ROLE x"),
            ProvisioningStatement::with_args(
                "ALTER DATABASE y OWNER TO x",
                vec![SqlArgument::Text("a".to_string())]
            ),
            ProvisioningStatement::new("GRANT ALL ON SCHEMA public TO x"),
        ]
    );
}

#[test]
fn test_argument_types() {
    let statements = decode_provisioning_statements(&array(json!([
        {"query": "SELECT $1, $2, $3, $4, $5", "args": [null, true, 7, 2.5, {"k": "v"}]},
    ])))
    .unwrap();

    assert_eq!(
        statements[0].args,
        vec![
            SqlArgument::Null,
            SqlArgument::Bool(true),
            SqlArgument::Int(7),
            SqlArgument::Float(2.5),
            SqlArgument::Json(json!({"k": "v"})),
        ]
    );
}

#[test]
fn test_empty_array() {
    assert_eq!(decode_provisioning_statements(&array(json!([]))), Ok(vec![]));
}

#[test]
fn test_result_must_be_array() {
    let output = ScriptOutput {
        value_type: ScriptValueType::String,
        value: json!("CREATE ROLE x"),
    };

    assert_eq!(
        decode_provisioning_statements(&output),
        Err(DecodeError::TypeMismatch(TypeMismatchError {
            location: ResultLocation::Result,
            expected: "array",
            actual: ScriptValueType::String,
            value: json!("CREATE ROLE x"),
        }))
    );
}

#[test]
fn test_missing_query() {
    assert_eq!(
        decode_provisioning_statements(&array(json!(["SELECT 1", {"args": []}]))),
        Err(DecodeError::FieldMissing(FieldMissingError {
            index: 1,
            field: "query"
        }))
    );
}

#[test]
fn test_non_string_query() {
    assert_eq!(
        decode_provisioning_statements(&array(json!([{"query": 1}]))),
        Err(DecodeError::TypeMismatch(TypeMismatchError {
            location: ResultLocation::Field {
                index: 0,
                field: "query"
            },
            expected: "string",
            actual: ScriptValueType::Int,
            value: json!(1),
        }))
    );
}

#[test]
fn test_non_array_args() {
    let err = decode_provisioning_statements(&array(json!([{"query": "SELECT $1", "args": "a"}])))
        .unwrap_err();

    assert_eq!(err.to_string(), r#"Expected array at result[0].args, but got string "a""#);
}

#[test]
fn test_unexpected_element() {
    let err =
        decode_provisioning_statements(&array(json!(["SELECT 1", "SELECT 2", 3]))).unwrap_err();

    assert_eq!(
        err,
        DecodeError::TypeMismatch(TypeMismatchError {
            location: ResultLocation::Element(2),
            expected: "string or map",
            actual: ScriptValueType::Int,
            value: json!(3),
        })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
