// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side state of one search.
//!
//! A [`SearchSession`] holds the current term, one stream per entity kind
//! (items, cursor, exhaustion, in-flight flag) and the last error. Only the
//! [`Paginator`](super::Paginator) mutates it; callers get clones.
//!
//! Every mutation that starts a request bumps or records the session
//! `generation`. A response is applied only if the generation it was issued
//! under is still current, which is how results of a superseded term are
//! dropped instead of merged.

use tracing::debug;

use crate::contracts::check_page_follows;
use crate::error::SearchError;
use crate::query::{build_range_query, RangeQuery};
use crate::types::{Cursor, EntityKind, NormalizedKey, PostHit, SearchableEntity, UserHit};

/// One kind's paginated result stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct KindStream {
    items: Vec<SearchableEntity>,
    cursor: Option<Cursor>,
    exhausted: bool,
    loading: bool,
}

impl KindStream {
    /// Append a page fetched with `page_size` as its limit.
    fn extend(&mut self, page: Vec<SearchableEntity>, page_size: usize) {
        check_page_follows(self.cursor.as_ref(), &page);
        self.exhausted = page.len() < page_size;
        if let Some(last) = page.last() {
            self.cursor = Some(last.cursor());
        }
        self.items.extend(page);
    }

    fn replace(&mut self, page: Vec<SearchableEntity>, page_size: usize) {
        *self = KindStream::default();
        self.extend(page, page_size);
    }
}

/// Per-kind status exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamStatus {
    pub count: usize,
    pub exhausted: bool,
    pub loading: bool,
}

/// What the results area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// No term.
    Idle,
    /// First page for the term still in flight.
    Loading,
    /// The first fetch for the term failed; nothing to show but the error.
    Failed(SearchError),
    /// Completed search, zero matches.
    NoResults,
    /// At least one result. A load-more error may accompany it, see
    /// [`SearchSession::error`].
    Results,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    term: String,
    key: NormalizedKey,
    generation: u64,
    posts: KindStream,
    users: KindStream,
    error: Option<SearchError>,
    /// A search for `key` has completed successfully at least once.
    fetched: bool,
}

impl SearchSession {
    // =========================================================================
    // READ ACCESS
    // =========================================================================

    /// The term as typed.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The normalized term the streams were queried with.
    pub fn key(&self) -> &NormalizedKey {
        &self.key
    }

    /// Merged results: every post, then every user, each in key order.
    pub fn results(&self) -> impl Iterator<Item = &SearchableEntity> {
        self.posts.items.iter().chain(self.users.items.iter())
    }

    pub fn len(&self) -> usize {
        self.posts.items.len() + self.users.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn posts(&self) -> impl Iterator<Item = &PostHit> {
        self.posts.items.iter().filter_map(|entity| match entity {
            SearchableEntity::Post(post) => Some(post),
            SearchableEntity::User(_) => None,
        })
    }

    pub fn users(&self) -> impl Iterator<Item = &UserHit> {
        self.users.items.iter().filter_map(|entity| match entity {
            SearchableEntity::User(user) => Some(user),
            SearchableEntity::Post(_) => None,
        })
    }

    pub fn status(&self, kind: EntityKind) -> StreamStatus {
        let stream = self.stream(kind);
        StreamStatus {
            count: stream.items.len(),
            exhausted: stream.exhausted,
            loading: stream.loading,
        }
    }

    pub fn is_exhausted(&self, kind: EntityKind) -> bool {
        self.stream(kind).exhausted
    }

    pub fn is_loading(&self, kind: EntityKind) -> bool {
        self.stream(kind).loading
    }

    /// Whether any request for this session is in flight.
    pub fn is_busy(&self) -> bool {
        self.posts.loading || self.users.loading
    }

    /// Whether a "load more" for some kind could return anything.
    pub fn has_more(&self) -> bool {
        self.fetched && EntityKind::ALL.iter().any(|&kind| !self.is_exhausted(kind))
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    /// Hide the current error. Results and cursors are left alone.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn view_state(&self) -> ViewState {
        if self.key.is_blank() {
            ViewState::Idle
        } else if !self.is_empty() {
            ViewState::Results
        } else if let Some(error) = &self.error {
            ViewState::Failed(error.clone())
        } else if self.fetched && !self.is_busy() {
            ViewState::NoResults
        } else {
            ViewState::Loading
        }
    }

    // =========================================================================
    // TRANSITIONS (driven by the paginator)
    // =========================================================================

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    fn stream(&self, kind: EntityKind) -> &KindStream {
        match kind {
            EntityKind::Post => &self.posts,
            EntityKind::User => &self.users,
        }
    }

    /// Drop everything and invalidate in-flight responses.
    pub(crate) fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = SearchSession {
            generation,
            ..SearchSession::default()
        };
    }

    /// Start a first-page search and return the two queries to issue.
    ///
    /// A different key starts from scratch. The same key (a retry) keeps the
    /// visible results and their cursors until the new pages arrive.
    pub(crate) fn begin_search(
        &mut self,
        term: &str,
        key: NormalizedKey,
        page_size: usize,
    ) -> Option<(u64, RangeQuery, RangeQuery)> {
        let posts = build_range_query(EntityKind::Post, &key, None, page_size)?;
        let users = build_range_query(EntityKind::User, &key, None, page_size)?;

        if key != self.key {
            self.reset();
            self.key = key;
        } else {
            self.generation += 1;
        }
        self.term = term.to_string();
        self.error = None;
        self.posts.loading = true;
        self.users.loading = true;

        Some((self.generation, posts, users))
    }

    /// Apply both first pages atomically.
    pub(crate) fn complete_search(
        &mut self,
        generation: u64,
        pages: Result<(Vec<SearchableEntity>, Vec<SearchableEntity>), SearchError>,
        page_size: usize,
    ) -> bool {
        if generation != self.generation {
            debug!(term = %self.key, generation, "discarding stale search response");
            return false;
        }

        self.posts.loading = false;
        self.users.loading = false;
        match pages {
            Ok((posts, users)) => {
                self.posts.replace(posts, page_size);
                self.users.replace(users, page_size);
                self.fetched = true;
            }
            Err(error) => self.error = Some(error),
        }
        true
    }

    /// Start a next-page request for `kind`, or `None` when there is nothing
    /// to do (blank term, nothing fetched yet, exhausted, already loading).
    pub(crate) fn begin_load_more(
        &mut self,
        kind: EntityKind,
        page_size: usize,
    ) -> Option<(u64, RangeQuery)> {
        if !self.fetched {
            return None;
        }
        let stream = match kind {
            EntityKind::Post => &mut self.posts,
            EntityKind::User => &mut self.users,
        };
        if stream.exhausted || stream.loading {
            return None;
        }
        let query = build_range_query(kind, &self.key, stream.cursor.as_ref(), page_size)?;

        stream.loading = true;
        self.error = None;
        Some((self.generation, query))
    }

    /// Append a next page after the existing items of the same kind.
    pub(crate) fn complete_load_more(
        &mut self,
        generation: u64,
        kind: EntityKind,
        page: Result<Vec<SearchableEntity>, SearchError>,
        page_size: usize,
    ) -> bool {
        if generation != self.generation {
            debug!(term = %self.key, %kind, generation, "discarding stale page");
            return false;
        }

        let stream = match kind {
            EntityKind::Post => &mut self.posts,
            EntityKind::User => &mut self.users,
        };
        stream.loading = false;
        match page {
            Ok(page) => stream.extend(page, page_size),
            Err(error) => self.error = Some(error),
        }
        true
    }
}
