// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The backing-store seam.
//!
//! Everything the search needs from the document database is one capability:
//! an ordered range scan over a collection's key field with a limit and a
//! resume-after cursor. [`RangeStore`] is that capability. [`MemoryStore`]
//! implements it over in-process ordered maps and is what the CLI and the
//! tests search against.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::build::{PostRecord, UserRecord};
use crate::error::StoreError;
use crate::query::RangeQuery;
use crate::types::{EntityKind, SearchableEntity};

/// Ordered range scans over the post and user collections.
#[async_trait]
pub trait RangeStore: Send + Sync {
    /// Return up to `query.limit` entities of `query.kind` admitted by the
    /// query, in ascending `(key, id)` order.
    async fn range(&self, query: &RangeQuery) -> Result<Vec<SearchableEntity>, StoreError>;
}

#[derive(Default)]
struct Collection {
    /// Sorted scan order.
    ordered: BTreeMap<(String, String), SearchableEntity>,
    /// id → current key, to drop the old entry when a key changes.
    keys: HashMap<String, String>,
}

impl Collection {
    fn upsert(&mut self, entity: SearchableEntity) {
        let id = entity.id().to_string();
        let key = entity.key().as_str().to_string();
        if let Some(old_key) = self.keys.insert(id.clone(), key.clone()) {
            self.ordered.remove(&(old_key, id.clone()));
        }
        self.ordered.insert((key, id), entity);
    }

    fn remove(&mut self, id: &str) -> Option<SearchableEntity> {
        let key = self.keys.remove(id)?;
        self.ordered.remove(&(key, id.to_string()))
    }

    fn scan(&self, query: &RangeQuery) -> Vec<SearchableEntity> {
        let start = (query.lower.clone(), String::new());
        self.ordered
            .range(start..)
            .take_while(|((key, _), _)| key.as_str() <= query.upper.as_str())
            .filter(|((key, id), _)| query.admits(key, id))
            .take(query.limit)
            .map(|(_, entity)| entity.clone())
            .collect()
    }
}

/// In-process document store with ordered keys.
#[derive(Default)]
pub struct MemoryStore {
    posts: RwLock<Collection>,
    users: RwLock<Collection>,
    served: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn collection(&self, kind: EntityKind) -> &RwLock<Collection> {
        match kind {
            EntityKind::Post => &self.posts,
            EntityKind::User => &self.users,
        }
    }

    /// Create or replace a post, recomputing its key.
    ///
    /// The old key entry and the new one change under a single write lock.
    pub fn put_post(&self, record: &PostRecord) {
        self.upsert(SearchableEntity::Post(record.to_hit()));
    }

    /// Create or replace a user, recomputing its key.
    pub fn put_user(&self, record: &UserRecord) {
        self.upsert(SearchableEntity::User(record.to_hit()));
    }

    /// Insert an entity whose key has already been computed.
    pub fn upsert(&self, entity: SearchableEntity) {
        self.collection(entity.kind()).write().upsert(entity);
    }

    pub fn remove(&self, kind: EntityKind, id: &str) -> Option<SearchableEntity> {
        self.collection(kind).write().remove(id)
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        self.collection(kind).read().ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.iter().all(|&kind| self.len(kind) == 0)
    }

    /// Number of range scans answered so far.
    pub fn queries_served(&self) -> usize {
        self.served.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RangeStore for MemoryStore {
    async fn range(&self, query: &RangeQuery) -> Result<Vec<SearchableEntity>, StoreError> {
        self.served.fetch_add(1, Ordering::Relaxed);
        let page = self.collection(query.kind).read().scan(query);
        debug!(
            collection = query.collection(),
            lower = %query.lower,
            returned = page.len(),
            "range scan"
        );
        Ok(page)
    }
}
