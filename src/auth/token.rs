// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token key generation.

use rand::{rngs::OsRng, RngCore};

/// Raw entropy per key, in bytes. Hex-encoded this yields [`TOKEN_KEY_LEN`]
/// characters.
const TOKEN_KEY_BYTES: usize = 20;

/// Length of an encoded token key.
pub const TOKEN_KEY_LEN: usize = TOKEN_KEY_BYTES * 2;

/// Generate a fresh token key: 20 bytes from the OS CSPRNG as lowercase hex.
///
/// Collisions are astronomically unlikely; the store's uniqueness constraint
/// still backstops insertion (see `InMemoryStore::issue_token`).
pub fn generate_key() -> String {
    let mut bytes = [0u8; TOKEN_KEY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
