// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use database_common::*;
use secrecy::SecretString;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

async fn connect_error<DB: SqlxDriver>(connection_string: &str) -> DatabaseError {
    match SqlxConnection::<DB>::connect(&SecretString::from(connection_string)).await {
        Ok(_) => panic!("Connection to {connection_string:?} should not succeed"),
        Err(e) => e,
    }
}

#[test_log::test(tokio::test)]
async fn test_postgres_rejects_malformed_connection_string() {
    let err = connect_error::<sqlx::Postgres>("not a connection string").await;
    assert!(matches!(err, DatabaseError::SqlxError(_)), "{err:?}");
}

#[test_log::test(tokio::test)]
async fn test_mysql_rejects_malformed_connection_string() {
    let err = connect_error::<sqlx::MySql>("not a connection string").await;
    assert!(matches!(err, DatabaseError::SqlxError(_)), "{err:?}");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
