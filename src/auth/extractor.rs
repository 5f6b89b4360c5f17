// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractors for token-authenticated requests.
//!
//! Use [`Auth`] in handlers that require a logged-in member:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(member): Auth) -> impl IntoResponse {
//!     // member is the resolved Member
//! }
//! ```
//!
//! [`OptionalAuth`] yields `None` when the request carries no credentials for
//! this scheme (no header, or a different scheme entirely), instead of
//! rejecting. Malformed or invalid `Token` credentials still reject: a bad
//! token is an error, not anonymity.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::{AuthError, SCHEME};
use crate::models::Member;
use crate::state::AppState;

/// Extractor that requires an authenticated member.
pub struct Auth(pub Member);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match authenticate(parts, state).await? {
            Some(member) => Ok(Auth(member)),
            None => Err(AuthError::NotAuthenticated),
        }
    }
}

/// Extractor that resolves a member when credentials are present, and
/// `None` when the request is anonymous for this scheme.
pub struct OptionalAuth(pub Option<Member>);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(authenticate(parts, state).await?))
    }
}

/// Resolve the request's credentials to a member.
///
/// `Ok(None)` means no authentication was attempted (anonymous); the caller
/// decides whether that is acceptable for the endpoint.
async fn authenticate(parts: &Parts, state: &AppState) -> Result<Option<Member>, AuthError> {
    let Some(key) = token_from_header(parts) else {
        return Ok(None);
    };
    let key = key?;

    let store = state.store.read().await;
    let token = store.token_by_key(key).ok_or(AuthError::InvalidToken)?;
    let member = store
        .member_by_id(token.member_id)
        .ok_or(AuthError::InactiveUser)?;

    Ok(Some(member.clone()))
}

/// Pull the token key out of the `Authorization` header.
///
/// - `None`: header absent, empty, or a different scheme — no attempt made.
/// - `Some(Err(_))`: our scheme, but the credentials are malformed.
/// - `Some(Ok(key))`: our scheme with exactly one token segment.
///
/// Parsing works on raw header bytes so a non-UTF-8 token is reported as
/// invalid characters rather than a missing header.
fn token_from_header(parts: &Parts) -> Option<Result<&str, AuthError>> {
    let value = parts.headers.get(AUTHORIZATION)?;

    let mut segments = value
        .as_bytes()
        .split(|b| b.is_ascii_whitespace())
        .filter(|segment| !segment.is_empty());

    let scheme = segments.next()?;
    if !scheme.eq_ignore_ascii_case(SCHEME.as_bytes()) {
        return None;
    }

    let Some(key) = segments.next() else {
        return Some(Err(AuthError::NoCredentials));
    };
    if segments.next().is_some() {
        return Some(Err(AuthError::TokenContainsSpaces));
    }

    Some(
        std::str::from_utf8(key).map_err(|_| AuthError::UndecodableToken),
    )
}
