// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;

use dbinit_rotation::CredentialGenerator;
use dbinit_rotation_services::{CREDENTIAL_LENGTH, CREDENTIAL_SYMBOLS, CredentialGeneratorImpl};
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn generator() -> std::sync::Arc<dyn CredentialGenerator> {
    let mut b = dill::CatalogBuilder::new();
    b.add::<CredentialGeneratorImpl>();
    b.build().get_one().unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test]
fn test_credential_composition() {
    let generator = generator();

    for _ in 0..100 {
        let credential = generator.generate().unwrap();
        let password = credential.expose();

        assert_eq!(password.chars().count(), CREDENTIAL_LENGTH);
        assert!(password.chars().filter(char::is_ascii_digit).count() >= 10);
        assert!(password.chars().any(|c| CREDENTIAL_SYMBOLS.contains(c)));
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(
            password
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || CREDENTIAL_SYMBOLS.contains(c)),
            "unexpected character in {password}"
        );
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test]
fn test_credentials_are_distinct() {
    let generator = generator();

    let passwords: HashSet<String> = (0..50)
        .map(|_| generator.generate().unwrap().expose().to_string())
        .collect();

    assert_eq!(passwords.len(), 50);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test]
fn test_credential_is_redacted_in_debug_output() {
    let credential = generator().generate().unwrap();

    let debug = format!("{credential:?}");

    assert!(!debug.contains(credential.expose()));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
