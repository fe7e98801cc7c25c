// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("No active transaction")]
    NoActiveTransaction,

    #[error(transparent)]
    SqlxError(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl DatabaseError {
    /// Single-line description including the underlying cause
    pub fn reason(&self) -> String {
        match self {
            Self::Internal(e) => e.reason(),
            Self::NoActiveTransaction | Self::SqlxError(_) => self.to_string(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
