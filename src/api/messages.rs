// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Message feed handlers: paginated listing and creation.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::Auth,
    error::ApiError,
    models::{
        validate_message_text, CreateMessageRequest, ListMessagesQuery, Message,
        MessageListResponse, MessageResponse,
    },
    state::AppState,
    store::InMemoryStore,
};

const DEFAULT_PAGE_SIZE: i64 = 100;
const MAX_PAGE_SIZE: i64 = 1000;

/// Resolve page parameters. Out-of-range values fall back to the defaults
/// silently rather than erroring.
fn page_params(query: &ListMessagesQuery) -> (usize, usize) {
    let limit = match query.limit {
        Some(limit) if (1..=MAX_PAGE_SIZE).contains(&limit) => limit,
        _ => DEFAULT_PAGE_SIZE,
    };
    let offset = query.offset.filter(|offset| *offset >= 0).unwrap_or(0);
    (limit as usize, offset as usize)
}

/// The author's username is resolved at read time; a member rename shows up
/// on that member's past messages.
fn to_response(store: &InMemoryStore, message: Message) -> MessageResponse {
    let username = store
        .member_by_id(message.author_id)
        .map(|member| member.username.clone())
        .unwrap_or_default();
    MessageResponse {
        id: message.id,
        username,
        text: message.text,
        created_at: message.created_at,
    }
}

pub async fn list_messages(
    Auth(_member): Auth,
    State(state): State<AppState>,
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<MessageListResponse>, ApiError> {
    let (limit, offset) = page_params(&query);

    let store = state.store.read().await;
    let total = store.message_count();
    let messages = store
        .list_messages(limit, offset)
        .into_iter()
        .map(|message| to_response(&store, message))
        .collect();

    Ok(Json(MessageListResponse { messages, total }))
}

/// Create a message authored by the authenticated member. The author is
/// always the request identity; any author field in the body is ignored.
pub async fn create_message(
    Auth(member): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreateMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    validate_message_text(&request.text)?;

    let mut store = state.store.write().await;
    let message = store.create_message(member.id, &request.text);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            id: message.id,
            username: member.username,
            text: message.text,
            created_at: message.created_at,
        }),
    ))
}
