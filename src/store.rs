// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory store for members, tokens and messages.
//!
//! The store is wrapped in `Arc<RwLock<_>>` by [`crate::state::AppState`].
//! Every `&mut self` method therefore runs under the write guard, which is
//! what makes [`InMemoryStore::issue_token`] an atomic revoke-then-issue:
//! racing logins for the same member serialize on the lock and exactly one
//! live token remains.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::token::generate_key;
use crate::error::ApiError;
use crate::models::{AuthToken, Member, Message};

#[derive(Default)]
pub struct InMemoryStore {
    members: HashMap<Uuid, Member>,
    /// Keyed by token key; the key is the token's primary identifier.
    tokens: HashMap<String, AuthToken>,
    /// Insertion order is creation order; listing reads it in reverse.
    messages: Vec<Message>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Members
    // -------------------------------------------------------------------------

    /// Insert a new member. Username uniqueness (case-sensitive) is enforced
    /// here, under the write guard, so a duplicate can never slip in between
    /// a caller's pre-check and the insert.
    pub fn create_member(
        &mut self,
        username: &str,
        password_hash: String,
    ) -> Result<Member, ApiError> {
        if self.member_by_username(username).is_some() {
            return Err(ApiError::bad_request("Username already exists"));
        }

        let member = Member {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            created_at: Utc::now(),
        };
        self.members.insert(member.id, member.clone());
        Ok(member)
    }

    pub fn member_by_username(&self, username: &str) -> Option<&Member> {
        self.members.values().find(|m| m.username == username)
    }

    pub fn member_by_id(&self, id: Uuid) -> Option<&Member> {
        self.members.get(&id)
    }

    /// Apply a profile update to a single member row. Fields left as `None`
    /// are unchanged. The uniqueness check skips the member's own row, so
    /// renaming to the current username is a no-op rather than a conflict.
    pub fn update_member(
        &mut self,
        id: Uuid,
        username: Option<&str>,
        password_hash: Option<String>,
    ) -> Result<Member, ApiError> {
        if let Some(username) = username {
            let taken = self
                .members
                .values()
                .any(|m| m.id != id && m.username == username);
            if taken {
                return Err(ApiError::bad_request("Username already exists"));
            }
        }

        let member = self
            .members
            .get_mut(&id)
            .ok_or_else(|| ApiError::bad_request("Member not found"))?;

        if let Some(username) = username {
            member.username = username.to_string();
        }
        if let Some(password_hash) = password_hash {
            member.password_hash = password_hash;
        }

        Ok(member.clone())
    }

    // -------------------------------------------------------------------------
    // Tokens
    // -------------------------------------------------------------------------

    /// Revoke all of a member's tokens and issue exactly one new one.
    ///
    /// Runs as a single call under the write guard, so concurrent logins for
    /// the same member cannot leave zero or two live tokens. Key generation
    /// retries on the (astronomically unlikely) collision with a stored key.
    pub fn issue_token(&mut self, member_id: Uuid) -> AuthToken {
        self.delete_tokens_for(member_id);

        let mut key = generate_key();
        while self.tokens.contains_key(&key) {
            key = generate_key();
        }

        let token = AuthToken {
            key: key.clone(),
            member_id,
            created_at: Utc::now(),
        };
        self.tokens.insert(key, token.clone());
        token
    }

    /// Delete all tokens owned by a member. Idempotent.
    pub fn delete_tokens_for(&mut self, member_id: Uuid) {
        self.tokens.retain(|_, token| token.member_id != member_id);
    }

    pub fn token_by_key(&self, key: &str) -> Option<&AuthToken> {
        self.tokens.get(key)
    }

    // -------------------------------------------------------------------------
    // Messages
    // -------------------------------------------------------------------------

    pub fn create_message(&mut self, author_id: Uuid, text: &str) -> Message {
        let message = Message {
            id: Uuid::new_v4(),
            text: text.to_string(),
            author_id,
            created_at: Utc::now(),
        };
        self.messages.push(message.clone());
        message
    }

    /// Page of messages, newest first.
    pub fn list_messages(&self, limit: usize, offset: usize) -> Vec<Message> {
        self.messages
            .iter()
            .rev()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Total number of messages, unaffected by pagination.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn member(store: &mut InMemoryStore, username: &str) -> Member {
        store
            .create_member(username, format!("$argon2id$fake-{username}"))
            .expect("member creation succeeds")
    }

    #[test]
    fn duplicate_username_is_rejected_exactly_once() {
        let mut store = InMemoryStore::new();
        member(&mut store, "alice");

        let err = store
            .create_member("alice", "$argon2id$other".into())
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Username already exists");

        let rows = store
            .members
            .values()
            .filter(|m| m.username == "alice")
            .count();
        assert_eq!(rows, 1);
    }

    #[test]
    fn username_lookup_is_case_sensitive() {
        let mut store = InMemoryStore::new();
        member(&mut store, "alice");
        assert!(store.member_by_username("Alice").is_none());
        assert!(store.create_member("Alice", "$argon2id$x".into()).is_ok());
    }

    #[test]
    fn issue_token_revokes_previous_token() {
        let mut store = InMemoryStore::new();
        let alice = member(&mut store, "alice");

        let first = store.issue_token(alice.id);
        let second = store.issue_token(alice.id);

        assert_ne!(first.key, second.key);
        assert!(store.token_by_key(&first.key).is_none());
        assert_eq!(
            store.token_by_key(&second.key).map(|t| t.member_id),
            Some(alice.id)
        );
    }

    #[test]
    fn issue_token_leaves_other_members_tokens_alone() {
        let mut store = InMemoryStore::new();
        let alice = member(&mut store, "alice");
        let bob = member(&mut store, "bob");

        let bob_token = store.issue_token(bob.id);
        store.issue_token(alice.id);

        assert!(store.token_by_key(&bob_token.key).is_some());
    }

    #[test]
    fn delete_tokens_is_idempotent() {
        let mut store = InMemoryStore::new();
        let alice = member(&mut store, "alice");

        store.delete_tokens_for(alice.id);

        let token = store.issue_token(alice.id);
        store.delete_tokens_for(alice.id);
        store.delete_tokens_for(alice.id);
        assert!(store.token_by_key(&token.key).is_none());
    }

    #[test]
    fn rename_to_own_username_is_a_noop() {
        let mut store = InMemoryStore::new();
        let alice = member(&mut store, "alice");

        let updated = store.update_member(alice.id, Some("alice"), None).unwrap();
        assert_eq!(updated.username, "alice");
    }

    #[test]
    fn rename_to_taken_username_conflicts() {
        let mut store = InMemoryStore::new();
        let alice = member(&mut store, "alice");
        member(&mut store, "bob");

        let err = store.update_member(alice.id, Some("bob"), None).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn update_member_leaves_absent_fields_unchanged() {
        let mut store = InMemoryStore::new();
        let alice = member(&mut store, "alice");
        let original_hash = alice.password_hash.clone();

        let updated = store
            .update_member(alice.id, Some("alicia"), None)
            .unwrap();
        assert_eq!(updated.username, "alicia");
        assert_eq!(updated.password_hash, original_hash);

        let updated = store
            .update_member(alice.id, None, Some("$argon2id$new".into()))
            .unwrap();
        assert_eq!(updated.username, "alicia");
        assert_eq!(updated.password_hash, "$argon2id$new");
    }

    #[test]
    fn messages_list_newest_first_with_offset() {
        let mut store = InMemoryStore::new();
        let alice = member(&mut store, "alice");

        for i in 0..5 {
            store.create_message(alice.id, &format!("msg {i}"));
        }

        let page = store.list_messages(2, 1);
        let texts: Vec<&str> = page.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["msg 3", "msg 2"]);
        assert_eq!(store.message_count(), 5);
    }

    #[test]
    fn offset_past_end_yields_empty_page() {
        let mut store = InMemoryStore::new();
        let alice = member(&mut store, "alice");
        store.create_message(alice.id, "only one");

        assert!(store.list_messages(100, 10).is_empty());
        assert_eq!(store.message_count(), 1);
    }
}
