// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and a scriptable store to avoid duplication.

#![doc(hidden)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::build::{PostRecord, UserRecord};
use crate::error::StoreError;
use crate::query::RangeQuery;
use crate::store::{MemoryStore, RangeStore};
use crate::types::{EntityKind, PostHit, SearchableEntity, UserHit};

/// Create a post record with default fields and no stored key.
pub fn post_record(id: &str, title: &str) -> PostRecord {
    PostRecord {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: format!("Excerpt for {}", title),
        author_id: None,
        created_at: None,
        title_normalized: None,
    }
}

/// Create a user record with a username and no stored key.
pub fn user_record(id: &str, username: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        username: Some(username.to_string()),
        display_name: None,
        photo_url: None,
        username_normalized: None,
    }
}

/// Create a keyed post hit.
pub fn make_post(id: &str, title: &str) -> PostHit {
    post_record(id, title).to_hit()
}

/// Create a keyed user hit.
pub fn make_user(id: &str, username: &str) -> UserHit {
    user_record(id, username).to_hit()
}

/// A store preloaded with `posts` and `users` titled/named by the given text.
///
/// Ids are `p0, p1, …` and `u0, u1, …` in argument order.
pub fn seeded_store(posts: &[&str], users: &[&str]) -> MemoryStore {
    let store = MemoryStore::new();
    for (i, title) in posts.iter().enumerate() {
        store.put_post(&post_record(&format!("p{i}"), title));
    }
    for (i, name) in users.iter().enumerate() {
        store.put_user(&user_record(&format!("u{i}"), name));
    }
    store
}

/// What [`ScriptedStore`] does for a query it has a rule for.
#[derive(Debug, Clone)]
pub enum Behaviour {
    /// Answer after the delay.
    Delay(Duration),
    /// Fail with the error after the delay.
    Fail(Duration, StoreError),
}

/// A [`MemoryStore`] with per-(kind, lower bound) latency and failures.
///
/// Rules are keyed on the query's lower bound, i.e. the normalized term, so a
/// test can make "cat" slow and "dog" fast.
#[derive(Default)]
pub struct ScriptedStore {
    inner: MemoryStore,
    rules: Mutex<HashMap<(EntityKind, String), Behaviour>>,
    log: Mutex<Vec<RangeQuery>>,
}

impl ScriptedStore {
    pub fn new(inner: MemoryStore) -> Arc<Self> {
        Arc::new(Self {
            inner,
            ..Self::default()
        })
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    pub fn set(&self, kind: EntityKind, term: &str, behaviour: Behaviour) {
        self.rules.lock().insert((kind, term.to_string()), behaviour);
    }

    pub fn clear_rules(&self) {
        self.rules.lock().clear();
    }

    /// Every query received so far, in arrival order.
    pub fn queries(&self) -> Vec<RangeQuery> {
        self.log.lock().clone()
    }
}

#[async_trait]
impl RangeStore for ScriptedStore {
    async fn range(&self, query: &RangeQuery) -> Result<Vec<SearchableEntity>, StoreError> {
        self.log.lock().push(query.clone());
        let rule = self
            .rules
            .lock()
            .get(&(query.kind, query.lower.clone()))
            .cloned();
        match rule {
            Some(Behaviour::Delay(delay)) => tokio::time::sleep(delay).await,
            Some(Behaviour::Fail(delay, error)) => {
                tokio::time::sleep(delay).await;
                return Err(error);
            }
            None => {}
        }
        self.inner.range(query).await
    }
}
