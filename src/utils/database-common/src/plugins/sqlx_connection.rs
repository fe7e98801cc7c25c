// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::{ExposeSecret, SecretString};
use sqlx::pool::PoolOptions;
use sqlx::{MySql, Pool, Postgres, Transaction};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The part of statement execution that depends on the concrete sqlx driver
#[async_trait::async_trait]
pub trait SqlxDriver: sqlx::Database {
    async fn run_statement(
        connection: &mut Self::Connection,
        sql: &str,
        args: &[SqlArgument],
    ) -> Result<u64, sqlx::Error>;
}

macro_rules! impl_sqlx_driver {
    ($db:ty) => {
        #[async_trait::async_trait]
        impl SqlxDriver for $db {
            async fn run_statement(
                connection: &mut <$db as sqlx::Database>::Connection,
                sql: &str,
                args: &[SqlArgument],
            ) -> Result<u64, sqlx::Error> {
                let mut query = sqlx::query::<$db>(sql);
                for arg in args {
                    query = match arg {
                        SqlArgument::Null => query.bind(None::<String>),
                        SqlArgument::Bool(v) => query.bind(*v),
                        SqlArgument::Int(v) => query.bind(*v),
                        SqlArgument::Float(v) => query.bind(*v),
                        SqlArgument::Text(v) => query.bind(v.clone()),
                        SqlArgument::Json(v) => query.bind(sqlx::types::Json(v.clone())),
                    };
                }

                let result = query.execute(connection).await?;
                Ok(result.rows_affected())
            }
        }
    };
}

impl_sqlx_driver!(Postgres);
impl_sqlx_driver!(MySql);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Single-connection pool holding at most one open transaction
pub struct SqlxConnection<DB: SqlxDriver> {
    pool: Pool<DB>,
    transaction: Option<Transaction<'static, DB>>,
}

impl<DB: SqlxDriver> SqlxConnection<DB> {
    #[tracing::instrument(level = "debug", skip_all, fields(driver = DB::NAME))]
    pub async fn connect(
        connection_string: &SecretString,
    ) -> Result<Box<dyn DatabaseConnection>, DatabaseError> {
        let pool = PoolOptions::<DB>::new()
            .max_connections(1)
            .connect(connection_string.expose_secret())
            .await?;

        Ok(Box::new(Self {
            pool,
            transaction: None,
        }))
    }

    fn take_transaction(&mut self) -> Result<Transaction<'static, DB>, DatabaseError> {
        self.transaction
            .take()
            .ok_or(DatabaseError::NoActiveTransaction)
    }
}

#[async_trait::async_trait]
impl<DB: SqlxDriver> DatabaseConnection for SqlxConnection<DB> {
    async fn begin(&mut self) -> Result<(), DatabaseError> {
        self.transaction = Some(self.pool.begin().await?);
        Ok(())
    }

    async fn execute(&mut self, sql: &str, args: &[SqlArgument]) -> Result<u64, DatabaseError> {
        let tx = self
            .transaction
            .as_mut()
            .ok_or(DatabaseError::NoActiveTransaction)?;

        Ok(DB::run_statement(&mut **tx, sql, args).await?)
    }

    async fn commit(&mut self) -> Result<(), DatabaseError> {
        self.take_transaction()?.commit().await?;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), DatabaseError> {
        self.take_transaction()?.rollback().await?;
        Ok(())
    }

    async fn close(mut self: Box<Self>) -> Result<(), DatabaseError> {
        // An unfinished transaction is rolled back on drop
        drop(self.transaction.take());
        self.pool.close().await;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
