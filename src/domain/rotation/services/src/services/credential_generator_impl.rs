// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dbinit_rotation::{Credential, CredentialGenerator, GenerationError};
use dill::{component, interface};
use internal_error::ErrorIntoInternal;
use rand::rngs::{OsRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use secrecy::SecretString;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const CREDENTIAL_LENGTH: usize = 32;

const MIN_DIGITS: usize = 10;
const MIN_SYMBOLS: usize = 1;
const MIN_UPPERCASE: usize = 1;
const MIN_LOWERCASE: usize = 1;

const DIGITS: &[u8] = b"0123456789";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Accepted by the managed service as a master password and safe inside the
/// user-info part of a connection URL without escaping
pub const CREDENTIAL_SYMBOLS: &str = "!*-._~";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn CredentialGenerator)]
pub struct CredentialGeneratorImpl {}

impl CredentialGenerator for CredentialGeneratorImpl {
    fn generate(&self) -> Result<Credential, GenerationError> {
        let mut rng =
            StdRng::from_rng(OsRng).map_err(|e| GenerationError { source: e.int_err() })?;

        Ok(Credential::new(SecretString::from(generate_password(
            &mut rng,
        ))))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn generate_password<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut chars: Vec<char> = Vec::with_capacity(CREDENTIAL_LENGTH);

    pick_into(&mut chars, rng, DIGITS, MIN_DIGITS);
    pick_into(&mut chars, rng, CREDENTIAL_SYMBOLS.as_bytes(), MIN_SYMBOLS);
    pick_into(&mut chars, rng, UPPERCASE, MIN_UPPERCASE);
    pick_into(&mut chars, rng, LOWERCASE, MIN_LOWERCASE);

    let remaining = CREDENTIAL_LENGTH - chars.len();
    pick_into(&mut chars, rng, ALPHANUMERIC, remaining);

    chars.shuffle(rng);
    chars.into_iter().collect()
}

fn pick_into<R: Rng + ?Sized>(out: &mut Vec<char>, rng: &mut R, alphabet: &[u8], count: usize) {
    for _ in 0..count {
        let i = rng.gen_range(0..alphabet.len());
        out.push(char::from(alphabet[i]));
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
