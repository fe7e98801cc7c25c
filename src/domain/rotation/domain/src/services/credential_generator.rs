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

use crate::Credential;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(any(feature = "testing", test), mockall::automock)]
pub trait CredentialGenerator: Send + Sync {
    fn generate(&self) -> Result<Credential, GenerationError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Failed to seed the random generator from the OS entropy source")]
pub struct GenerationError {
    #[source]
    pub source: InternalError,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
