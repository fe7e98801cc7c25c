// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::*;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct SqlxDatabaseConnector {}

#[component(pub)]
#[interface(dyn DatabaseConnector)]
#[scope(Singleton)]
impl SqlxDatabaseConnector {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl DatabaseConnector for SqlxDatabaseConnector {
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(
            provider = %settings.provider,
            host = %settings.host,
            database = %settings.database_name,
        )
    )]
    async fn connect(
        &self,
        settings: &DatabaseConnectionSettings,
        credentials: &DatabaseCredentials,
    ) -> Result<Box<dyn DatabaseConnection>, DatabaseError> {
        let connection_string = settings.connection_string(credentials);

        match settings.provider {
            DatabaseProvider::Postgres => {
                SqlxConnection::<sqlx::Postgres>::connect(&connection_string).await
            }
            DatabaseProvider::MySql => {
                SqlxConnection::<sqlx::MySql>::connect(&connection_string).await
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
