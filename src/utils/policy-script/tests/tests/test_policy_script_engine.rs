// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use policy_script::*;
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use tokio_util::sync::CancellationToken;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn cluster() -> serde_json::Value {
    json!({
        "DBClusterIdentifier": "orders",
        "Engine": "aurora-postgresql",
        "Port": 5432,
        "TagList": [{"Key": "env", "Value": "prod"}],
    })
}

fn evaluate(script: &str) -> Result<ScriptOutput, ScriptError> {
    PolicyScriptEngine::default().evaluate(
        script,
        &ScriptBindings::cluster(cluster()),
        &ScriptInterrupt::default(),
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test]
fn test_boolean_result() {
    assert_eq!(
        evaluate("let result = 1 == 1;").unwrap(),
        ScriptOutput {
            value_type: ScriptValueType::Bool,
            value: json!(true),
        }
    );
    assert_eq!(evaluate("let result = 1 == 2;").unwrap().value, json!(false));
}

#[test_log::test]
fn test_reads_cluster_fields() {
    let output = evaluate(
        r#"
        let is_postgres = cluster.Engine.contains("postgresql");
        let is_prod = cluster.TagList.some(|t| t.Key == "env" && t.Value == "prod");
        let result = is_postgres && is_prod && cluster.Port == 5432;
        "#,
    )
    .unwrap();

    assert_eq!(output.value, json!(true));
}

#[test_log::test]
fn test_missing_field_is_unit() {
    let output = evaluate("let result = cluster.NoSuchField == ();").unwrap();
    assert_eq!(output.value, json!(true));
}

#[test_log::test]
fn test_string_result_keeps_observed_type() {
    let output = evaluate(r#"let result = "true";"#).unwrap();

    assert_eq!(output.value_type, ScriptValueType::String);
    assert_eq!(output.value_type.to_string(), "string");
    assert_eq!(output.value, json!("true"));
}

#[test_log::test]
fn test_array_of_maps_result() {
    let output = evaluate(
        r#"let result = ["CREATE ROLE x", #{query: "ALTER DATABASE y OWNER TO x", args: ["a"]}];"#,
    )
    .unwrap();

    assert_eq!(output.value_type, ScriptValueType::Array);
    assert_eq!(
        output.value,
        json!(["CREATE ROLE x", {"query": "ALTER DATABASE y OWNER TO x", "args": ["a"]}])
    );
}

#[test_log::test]
fn test_missing_result() {
    assert_eq!(
        evaluate("let answer = 42;"),
        Err(ScriptError::MissingResult { variable: "result" })
    );
}

#[test_log::test]
fn test_compile_error() {
    assert!(matches!(
        evaluate("let result = ;"),
        Err(ScriptError::Compile { .. })
    ));
}

#[test_log::test]
fn test_runtime_error() {
    assert!(matches!(
        evaluate(r#"throw "nope";"#),
        Err(ScriptError::Runtime { .. })
    ));
}

#[test_log::test]
fn test_cluster_is_read_only() {
    assert!(matches!(
        evaluate(r#"cluster.Engine = "mysql"; let result = true;"#),
        Err(ScriptError::Runtime { .. } | ScriptError::Compile { .. })
    ));
}

#[test_log::test]
fn test_passwords_unbound_by_default() {
    assert!(matches!(
        evaluate("let result = passwords;"),
        Err(ScriptError::Runtime { .. })
    ));
}

#[test_log::test]
fn test_passwords_binding() {
    let passwords = BTreeMap::from([
        ("app".to_string(), SecretString::from("pw-app")),
        ("ro".to_string(), SecretString::from("pw-ro")),
    ]);

    let output = PolicyScriptEngine::default()
        .evaluate(
            r#"let result = [passwords.app, passwords["ro"], type_of(passwords.app)];"#,
            &ScriptBindings::cluster(cluster()).with_passwords(passwords),
            &ScriptInterrupt::default(),
        )
        .unwrap();

    assert_eq!(output.value, json!(["pw-app", "pw-ro", "string"]));
}

#[test_log::test]
fn test_imports_are_not_resolved() {
    assert!(matches!(
        evaluate(r#"import "helpers" as helpers; let result = true;"#),
        Err(ScriptError::Runtime { .. })
    ));
}

#[test_log::test]
fn test_eval_is_disabled() {
    assert!(evaluate(r#"let result = eval("1 == 1");"#).is_err());
}

#[test_log::test]
fn test_operation_limit() {
    let engine = PolicyScriptEngine::new(ScriptLimits {
        max_operations: 10_000,
        ..ScriptLimits::default()
    });

    assert_eq!(
        engine.evaluate(
            "loop {}",
            &ScriptBindings::cluster(cluster()),
            &ScriptInterrupt::default(),
        ),
        Err(ScriptError::OperationLimitExceeded { limit: 10_000 })
    );
}

#[test_log::test]
fn test_cancelled_before_start() {
    let cancellation = CancellationToken::new();
    cancellation.cancel();

    assert_eq!(
        PolicyScriptEngine::default().evaluate(
            "let result = true;",
            &ScriptBindings::cluster(cluster()),
            &ScriptInterrupt::new(cancellation, None),
        ),
        Err(ScriptError::Cancelled)
    );
}

#[test_log::test]
fn test_cancelled_while_running() {
    let cancellation = CancellationToken::new();

    let canceller = {
        let cancellation = cancellation.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            cancellation.cancel();
        })
    };

    let result = PolicyScriptEngine::new(ScriptLimits {
        max_operations: 0,
        ..ScriptLimits::default()
    })
    .evaluate(
        "loop {}",
        &ScriptBindings::cluster(cluster()),
        &ScriptInterrupt::new(cancellation, None),
    );

    canceller.join().unwrap();
    assert_eq!(result, Err(ScriptError::Cancelled));
}

#[test_log::test]
fn test_deadline_exceeded_while_running() {
    let deadline = Instant::now() + Duration::from_millis(50);

    assert_eq!(
        PolicyScriptEngine::new(ScriptLimits {
            max_operations: 0,
            ..ScriptLimits::default()
        })
        .evaluate(
            "loop {}",
            &ScriptBindings::cluster(cluster()),
            &ScriptInterrupt::new(CancellationToken::new(), Some(deadline)),
        ),
        Err(ScriptError::DeadlineExceeded)
    );
}

#[test_log::test]
fn test_evaluation_is_deterministic() {
    let script = r#"
        let result = [];
        for tag in cluster.TagList {
            result.push(#{name: `tag-${tag.Key}`, secret: #{value: tag.Value, port: cluster.Port}});
        }
    "#;

    assert_eq!(evaluate(script).unwrap(), evaluate(script).unwrap());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
