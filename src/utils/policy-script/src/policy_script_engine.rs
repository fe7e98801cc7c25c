// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use rhai::module_resolvers::DummyModuleResolver;
use rhai::{Dynamic, Engine, EvalAltResult, Map, Scope};
use secrecy::ExposeSecret;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Interrupt signals are polled once per this many interpreter operations
const INTERRUPT_CHECK_INTERVAL: u64 = 1024;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Runs operator-supplied [Rhai](https://rhai.rs) scripts in a sandbox.
///
/// The interpreter exposes only pure data, string and math utilities: module
/// imports resolve to nothing and `eval` is disabled. A script receives the
/// cluster description as the constant `cluster` and, when provided, the
/// generated passwords as the constant `passwords` (a map of strings). It
/// communicates back solely by defining the top-level variable `result`.
///
/// Evaluation is CPU-bound and blocking; async callers should move it onto a
/// blocking worker.
#[derive(Debug, Clone, Default)]
pub struct PolicyScriptEngine {
    limits: ScriptLimits,
}

impl PolicyScriptEngine {
    pub const CLUSTER_VARIABLE: &'static str = "cluster";
    pub const PASSWORDS_VARIABLE: &'static str = "passwords";
    pub const RESULT_VARIABLE: &'static str = "result";

    pub fn new(limits: ScriptLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ScriptLimits {
        &self.limits
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(
        &self,
        script: &str,
        bindings: &ScriptBindings,
        interrupt: &ScriptInterrupt,
    ) -> Result<ScriptOutput, ScriptError> {
        if interrupt.cancellation.is_cancelled() {
            return Err(ScriptError::Cancelled);
        }
        if interrupt.deadline_passed() {
            return Err(ScriptError::DeadlineExceeded);
        }

        let engine = self.build_engine(interrupt);

        let ast = engine.compile(script).map_err(|e| ScriptError::Compile {
            message: e.to_string(),
        })?;

        let mut scope = Self::build_scope(bindings)?;

        engine
            .run_ast_with_scope(&mut scope, &ast)
            .map_err(|e| self.map_eval_error(*e, interrupt))?;

        let Some(result) = scope.get_value::<Dynamic>(Self::RESULT_VARIABLE) else {
            return Err(ScriptError::MissingResult {
                variable: Self::RESULT_VARIABLE,
            });
        };

        let value_type = ScriptValueType::of_dynamic(&result);
        tracing::debug!(%value_type, "Script evaluated");

        let value = rhai::serde::from_dynamic::<serde_json::Value>(&result).map_err(|e| {
            ScriptError::Unrepresentable {
                value_type: value_type.clone(),
                message: e.to_string(),
            }
        })?;

        Ok(ScriptOutput { value_type, value })
    }

    fn build_engine(&self, interrupt: &ScriptInterrupt) -> Engine {
        let mut engine = Engine::new();

        engine
            .set_module_resolver(DummyModuleResolver::new())
            .disable_symbol("eval")
            .set_max_operations(self.limits.max_operations)
            .set_max_call_levels(self.limits.max_call_levels)
            .set_max_expr_depths(self.limits.max_expr_depth, self.limits.max_expr_depth)
            .set_max_string_size(self.limits.max_string_size)
            .set_max_array_size(self.limits.max_array_size)
            .set_max_map_size(self.limits.max_map_size);

        engine.on_print(|text| tracing::debug!(text, "Script print"));
        engine.on_debug(|text, source, pos| {
            tracing::debug!(text, source, position = %pos, "Script debug");
        });

        let interrupt = interrupt.clone();
        engine.on_progress(move |ops| {
            if ops % INTERRUPT_CHECK_INTERVAL != 0 {
                return None;
            }
            if interrupt.cancellation.is_cancelled() || interrupt.deadline_passed() {
                Some(Dynamic::UNIT)
            } else {
                None
            }
        });

        engine
    }

    fn build_scope(bindings: &ScriptBindings) -> Result<Scope<'static>, ScriptError> {
        let mut scope = Scope::new();

        let cluster = rhai::serde::to_dynamic(&bindings.cluster).map_err(|e| ScriptError::Runtime {
            message: format!("Cannot bind '{}': {e}", Self::CLUSTER_VARIABLE),
        })?;
        scope.push_constant_dynamic(Self::CLUSTER_VARIABLE, cluster);

        if let Some(passwords) = &bindings.passwords {
            let map: Map = passwords
                .iter()
                .map(|(user, password)| {
                    (
                        user.as_str().into(),
                        Dynamic::from(password.expose_secret().to_string()),
                    )
                })
                .collect();
            scope.push_constant(Self::PASSWORDS_VARIABLE, map);
        }

        Ok(scope)
    }

    fn map_eval_error(&self, error: EvalAltResult, interrupt: &ScriptInterrupt) -> ScriptError {
        match error {
            EvalAltResult::ErrorTerminated(..) => {
                if interrupt.cancellation.is_cancelled() {
                    ScriptError::Cancelled
                } else {
                    ScriptError::DeadlineExceeded
                }
            }
            EvalAltResult::ErrorTooManyOperations(..) => ScriptError::OperationLimitExceeded {
                limit: self.limits.max_operations,
            },
            other => ScriptError::Runtime {
                message: other.to_string(),
            },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
