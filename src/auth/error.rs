// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.
//!
//! Every variant maps to 401 with the scheme keyword as the
//! `WWW-Authenticate` challenge. The display strings are the stable
//! client-facing messages; token lookups never surface as 404 so a probe
//! cannot learn whether a key ever existed.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use super::SCHEME;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Authentication was required but the request carried no credentials
    /// for this scheme.
    #[error("Authentication credentials were not provided.")]
    NotAuthenticated,
    /// Scheme keyword present but nothing followed it.
    #[error("Invalid token header. No credentials provided.")]
    NoCredentials,
    /// More than one segment followed the scheme keyword.
    #[error("Invalid token header. Token string should not contain spaces.")]
    TokenContainsSpaces,
    /// Token segment was not valid UTF-8.
    #[error("Invalid token header. Token string should not contain invalid characters.")]
    UndecodableToken,
    /// Key does not match any stored token.
    #[error("Invalid token.")]
    InvalidToken,
    /// Key resolved but the owning member no longer exists.
    #[error("User inactive or deleted.")]
    InactiveUser,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, SCHEME)],
            body,
        )
            .into_response()
    }
}
