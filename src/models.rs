// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Domain and API Data Models
//!
//! Domain records (`Member`, `AuthToken`, `Message`) live alongside the
//! request/response structures the REST API exchanges as JSON.
//!
//! `Member` deliberately does not derive `Serialize`: the stored password
//! hash must never reach a response body. Handlers answer with
//! [`ProfileResponse`] instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 150;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 128;
pub const MESSAGE_MAX_LEN: usize = 5000;

// =============================================================================
// Domain Records
// =============================================================================

/// A registered account.
#[derive(Debug, Clone)]
pub struct Member {
    pub id: Uuid,
    pub username: String,
    /// Argon2 PHC-format digest. Never serialized.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Opaque bearer token owned by exactly one member.
///
/// The issuance path keeps at most one live token per member.
#[derive(Debug, Clone)]
pub struct AuthToken {
    /// 40 lowercase hex characters (20 random bytes). Primary identifier.
    pub key: String,
    pub member_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// An entry in the shared message feed. Immutable after creation.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Validation
// =============================================================================

pub fn validate_username(username: &str) -> Result<(), ApiError> {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(ApiError::bad_request(format!(
            "Username must be between {USERNAME_MIN_LEN} and {USERNAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ApiError> {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(ApiError::bad_request(format!(
            "Password must be between {PASSWORD_MIN_LEN} and {PASSWORD_MAX_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_message_text(text: &str) -> Result<(), ApiError> {
    let len = text.chars().count();
    if len == 0 || len > MESSAGE_MAX_LEN {
        return Err(ApiError::bad_request(format!(
            "Message text must be between 1 and {MESSAGE_MAX_LEN} characters"
        )));
    }
    Ok(())
}

// =============================================================================
// Request / Response Bodies
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub username: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub id: Uuid,
    pub username: String,
}

/// Generic `{"message": ...}` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Member> for ProfileResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            username: member.username.clone(),
            created_at: member.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Flattened message body: the author appears as `username`, not as a nested
/// object. Unknown fields in requests (e.g. a client-supplied author) are
/// ignored by serde.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub username: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
