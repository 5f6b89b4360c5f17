// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Messages - Token-Authenticated Messaging Backend
//!
//! Account registration, password login issuing an opaque bearer token,
//! member profiles, and a shared paginated message feed.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Token authentication and the credential lifecycle
//! - `store` - In-memory member/token/message store

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
