// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{Arc, Mutex};

use internal_error::ErrorIntoInternal;
use secrecy::ExposeSecret;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub enum FakeDatabaseEvent {
    Connected { connection_string: String },
    Began,
    Executed { sql: String, args: Vec<SqlArgument> },
    Committed,
    RolledBack,
    Closed,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default)]
struct State {
    events: Vec<FakeDatabaseEvent>,
    executed_statements: usize,
    fail_connect: bool,
    fail_statement_at: Option<usize>,
    fail_commit: bool,
    fail_rollback: bool,
    fail_close: bool,
}

/// Records every interaction instead of talking to a database. Failures can
/// be injected at each step. Clones share the same recorded state.
#[derive(Clone, Default)]
pub struct FakeDatabaseConnector {
    state: Arc<Mutex<State>>,
}

impl FakeDatabaseConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failing_connect(self) -> Self {
        self.state.lock().unwrap().fail_connect = true;
        self
    }

    /// Statement with the given zero-based index fails to execute
    pub fn with_failing_statement(self, index: usize) -> Self {
        self.state.lock().unwrap().fail_statement_at = Some(index);
        self
    }

    pub fn with_failing_commit(self) -> Self {
        self.state.lock().unwrap().fail_commit = true;
        self
    }

    pub fn with_failing_rollback(self) -> Self {
        self.state.lock().unwrap().fail_rollback = true;
        self
    }

    pub fn with_failing_close(self) -> Self {
        self.state.lock().unwrap().fail_close = true;
        self
    }

    pub fn events(&self) -> Vec<FakeDatabaseEvent> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn executed_sql(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                FakeDatabaseEvent::Executed { sql, .. } => Some(sql),
                _ => None,
            })
            .collect()
    }

    pub fn was_connected(&self) -> bool {
        self.events()
            .iter()
            .any(|e| matches!(e, FakeDatabaseEvent::Connected { .. }))
    }
}

fn injected_failure(step: &str) -> DatabaseError {
    DatabaseError::Internal(format!("Injected {step} failure").int_err())
}

#[async_trait::async_trait]
impl DatabaseConnector for FakeDatabaseConnector {
    async fn connect(
        &self,
        settings: &DatabaseConnectionSettings,
        credentials: &DatabaseCredentials,
    ) -> Result<Box<dyn DatabaseConnection>, DatabaseError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_connect {
            return Err(injected_failure("connect"));
        }

        state.events.push(FakeDatabaseEvent::Connected {
            connection_string: settings
                .connection_string(credentials)
                .expose_secret()
                .to_string(),
        });

        Ok(Box::new(FakeDatabaseConnection {
            state: self.state.clone(),
            in_transaction: false,
        }))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct FakeDatabaseConnection {
    state: Arc<Mutex<State>>,
    in_transaction: bool,
}

#[async_trait::async_trait]
impl DatabaseConnection for FakeDatabaseConnection {
    async fn begin(&mut self) -> Result<(), DatabaseError> {
        self.state
            .lock()
            .unwrap()
            .events
            .push(FakeDatabaseEvent::Began);
        self.in_transaction = true;
        Ok(())
    }

    async fn execute(&mut self, sql: &str, args: &[SqlArgument]) -> Result<u64, DatabaseError> {
        if !self.in_transaction {
            return Err(DatabaseError::NoActiveTransaction);
        }

        let mut state = self.state.lock().unwrap();
        let index = state.executed_statements;
        state.executed_statements += 1;

        if state.fail_statement_at == Some(index) {
            return Err(injected_failure("statement"));
        }

        state.events.push(FakeDatabaseEvent::Executed {
            sql: sql.to_string(),
            args: args.to_vec(),
        });
        Ok(1)
    }

    async fn commit(&mut self) -> Result<(), DatabaseError> {
        if !self.in_transaction {
            return Err(DatabaseError::NoActiveTransaction);
        }
        self.in_transaction = false;

        let mut state = self.state.lock().unwrap();
        if state.fail_commit {
            return Err(injected_failure("commit"));
        }
        state.events.push(FakeDatabaseEvent::Committed);
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), DatabaseError> {
        if !self.in_transaction {
            return Err(DatabaseError::NoActiveTransaction);
        }
        self.in_transaction = false;

        let mut state = self.state.lock().unwrap();
        if state.fail_rollback {
            return Err(injected_failure("rollback"));
        }
        state.events.push(FakeDatabaseEvent::RolledBack);
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), DatabaseError> {
        let mut state = self.state.lock().unwrap();
        state.events.push(FakeDatabaseEvent::Closed);
        if state.fail_close {
            return Err(injected_failure("close"));
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
