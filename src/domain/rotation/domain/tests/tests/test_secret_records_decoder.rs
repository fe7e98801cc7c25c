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
fn test_string_secret() {
    assert_eq!(
        decode_secret_records(&array(json!([{"name": "foo", "secret": "password"}]))),
        Ok(vec![SecretRecord::new("foo", "password")])
    );
}

#[test]
fn test_json_secret() {
    assert_eq!(
        decode_secret_records(&array(json!([{"name": "foo", "secret": true}]))),
        Ok(vec![SecretRecord::new("foo", "true")])
    );
}

#[test]
fn test_structured_secret_is_compact_json() {
    assert_eq!(
        decode_secret_records(&array(json!([
            {"name": "app", "secret": {"username": "app", "password": "pw", "port": 5432}},
        ]))),
        Ok(vec![SecretRecord::new(
            "app",
            r#"{"password":"pw","port":5432,"username":"app"}"#
        )])
    );
}

#[test]
fn test_duplicate_names_are_kept() {
    let records = decode_secret_records(&array(json!([
        {"name": "foo", "secret": "a"},
        {"name": "foo", "secret": "b"},
    ])))
    .unwrap();

    assert_eq!(records.len(), 2);
}

#[test]
fn test_missing_fields() {
    assert_eq!(
        decode_secret_records(&array(json!([{"secret": "pw"}]))),
        Err(DecodeError::FieldMissing(FieldMissingError {
            index: 0,
            field: "name"
        }))
    );
    assert_eq!(
        decode_secret_records(&array(json!([{"name": "a", "secret": "x"}, {"name": "foo"}]))),
        Err(DecodeError::FieldMissing(FieldMissingError {
            index: 1,
            field: "secret"
        }))
    );
}

#[test]
fn test_non_map_element() {
    let err = decode_secret_records(&array(json!(["foo"]))).unwrap_err();

    assert_eq!(
        err,
        DecodeError::TypeMismatch(TypeMismatchError {
            location: ResultLocation::Element(0),
            expected: "map",
            actual: ScriptValueType::String,
            value: json!("foo"),
        })
    );
}

#[test]
fn test_non_string_name() {
    assert!(matches!(
        decode_secret_records(&array(json!([{"name": 1, "secret": "x"}]))),
        Err(DecodeError::TypeMismatch(TypeMismatchError {
            location: ResultLocation::Field { index: 0, field: "name" },
            ..
        }))
    ));
}

#[test]
fn test_result_must_be_array() {
    let output = ScriptOutput {
        value_type: ScriptValueType::Map,
        value: json!({"name": "foo", "secret": "x"}),
    };

    assert!(matches!(
        decode_secret_records(&output),
        Err(DecodeError::TypeMismatch(TypeMismatchError {
            location: ResultLocation::Result,
            actual: ScriptValueType::Map,
            ..
        }))
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_mismatched_value_is_redacted_and_truncated() {
    let err = decode_secret_records(&array(json!([
        "app:Sup3rS3cret!app:Sup3rS3cret!app:Sup3rS3cret!app:Sup3rS3cret!app:Sup3rS3cret!"
    ])))
    .unwrap_err();

    assert_eq!(
        err.redact(&["Sup3rS3cret!"]).to_string(),
        "Expected map at result[0], but got string \
         \"app:<redacted>app:<redacted>app:<redacted>app:<redacted>app:<re..."
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
