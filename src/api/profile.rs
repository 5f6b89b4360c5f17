// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Profile retrieval and update handlers.

use axum::{extract::State, Json};

use crate::{
    auth::{password, Auth},
    error::ApiError,
    models::{validate_password, validate_username, ProfileResponse, UpdateProfileRequest},
    state::AppState,
};

pub async fn get_profile(Auth(member): Auth) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(&member))
}

/// Update the authenticated member's username and/or password. Absent fields
/// are left unchanged; only the caller's own row can be touched.
pub async fn update_profile(
    Auth(member): Auth,
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    if let Some(ref username) = request.username {
        validate_username(username)?;
    }

    let password_hash = match request.password {
        Some(ref password) => {
            validate_password(password)?;
            Some(password::hash_password(password)?)
        }
        None => None,
    };

    let mut store = state.store.write().await;
    let updated = store.update_member(member.id, request.username.as_deref(), password_hash)?;

    Ok(Json(ProfileResponse::from(&updated)))
}
