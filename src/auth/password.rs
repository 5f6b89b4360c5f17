// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Password hashing and verification.
//!
//! Digests are argon2id in PHC string format: the algorithm, parameters and
//! salt are embedded in the digest, so verification needs no side channel of
//! configuration. A fresh random salt is drawn per hash, so hashing the same
//! password twice yields different digests.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::error::ApiError;

/// Hash a raw password into a self-describing PHC digest.
pub fn hash_password(raw: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(|_| ApiError::internal("Failed to hash password"))
}

/// Verify a raw password against a stored digest.
///
/// Comparison inside argon2 is constant-time. A digest that does not parse
/// verifies false rather than erroring.
pub fn verify_password(raw: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };
    Argon2::default()
        .verify_password(raw.as_bytes(), &parsed)
        .is_ok()
}

/// Burn one argon2 derivation without any stored digest.
///
/// Login calls this on the unknown-username path so it costs the same as a
/// wrong-password verification.
pub fn dummy_verify(raw: &str) {
    let _ = hash_password(raw);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_never_equals_plaintext() {
        let digest = hash_password("secret1").unwrap();
        assert_ne!(digest, "secret1");
        assert!(digest.starts_with("$argon2"));
        assert!(verify_password("secret1", &digest));
        assert!(!verify_password("secret2", &digest));
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = hash_password("secret1").unwrap();
        let second = hash_password("secret1").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("secret1", &first));
        assert!(verify_password("secret1", &second));
    }

    #[test]
    fn malformed_digest_verifies_false() {
        assert!(!verify_password("secret1", ""));
        assert!(!verify_password("secret1", "not-a-digest"));
        assert!(!verify_password("secret1", "$argon2id$truncated"));
    }
}
