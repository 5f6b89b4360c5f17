// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Opaque-token authentication for the messaging API.
//!
//! ## Auth Flow
//!
//! 1. Client registers, then logs in with username and password
//! 2. Login verifies the argon2 digest, revokes any previous token for the
//!    member and issues a fresh one
//! 3. Client sends `Authorization: Token <key>` on every request
//! 4. The [`Auth`] extractor resolves the key to a `Member` or rejects with
//!    401 and a `WWW-Authenticate: Token` challenge
//!
//! ## Security
//!
//! - Passwords are stored only as salted argon2 PHC digests
//! - Digest verification is constant-time; a malformed digest verifies false
//! - Token keys are 20 bytes from the OS CSPRNG, hex-encoded
//! - At most one live token per member; login and logout revoke prior keys
//! - Unknown-username and wrong-password logins are indistinguishable

pub mod error;
pub mod extractor;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use extractor::{Auth, OptionalAuth};

/// Keyword expected before the token key in the `Authorization` header.
/// Matched case-insensitively; also used as the challenge value on 401s.
pub const SCHEME: &str = "Token";
