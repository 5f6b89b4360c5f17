// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Registration, login and logout handlers.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    auth::{password, Auth},
    error::ApiError,
    models::{
        validate_password, validate_username, LoginRequest, LoginResponse, RegisterRequest,
        RegisterResponse, StatusMessage,
    },
    state::AppState,
};

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    validate_username(&request.username)?;
    validate_password(&request.password)?;

    let password_hash = password::hash_password(&request.password)?;

    // The store re-checks uniqueness under the write guard; it is the final
    // authority on the constraint.
    let mut store = state.store.write().await;
    let member = store.create_member(&request.username, password_hash)?;
    drop(store);

    info!(member_id = %member.id, "member registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: member.id,
            username: member.username,
            message: "User successfully registered".to_string(),
        }),
    ))
}

/// Verify credentials and issue a fresh token, revoking any previous one.
///
/// Unknown username and wrong password both answer with the same 401, and the
/// unknown-username path still burns an argon2 derivation so the two failures
/// are indistinguishable by timing as well as by message.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let member = {
        let store = state.store.read().await;
        store.member_by_username(&request.username).cloned()
    };

    let Some(member) = member else {
        password::dummy_verify(&request.password);
        return Err(invalid_credentials());
    };

    if !password::verify_password(&request.password, &member.password_hash) {
        return Err(invalid_credentials());
    }

    // Revoke-then-issue runs as one store call under the write guard.
    let token = state.store.write().await.issue_token(member.id);

    info!(member_id = %member.id, "member logged in");

    Ok(Json(LoginResponse {
        token: token.key,
        id: member.id,
        username: member.username,
    }))
}

pub async fn logout(
    Auth(member): Auth,
    State(state): State<AppState>,
) -> Result<Json<StatusMessage>, ApiError> {
    state.store.write().await.delete_tokens_for(member.id);

    info!(member_id = %member.id, "member logged out");

    Ok(Json(StatusMessage {
        message: "Successfully logged out".to_string(),
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("Invalid credentials")
}
