// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two paginated prefix scans, one session.
//!
//! `search` issues the first page of both collections back to back and
//! applies them together once both are in. `load_more` extends one kind from
//! its stored cursor; the two kinds have separate in-flight flags, so a slow
//! post page never holds up a user page.
//!
//! The session lock is only taken to plan a request and to apply its
//! response, never across an `.await`.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use super::session::SearchSession;
use crate::config::SearchConfig;
use crate::contracts::check_page_kind;
use crate::debounce::Debouncer;
use crate::error::SearchError;
use crate::query::{search_key, RangeQuery};
use crate::store::RangeStore;
use crate::types::{EntityKind, SearchableEntity};

/// Owner of the one [`SearchSession`]; cheap to clone, clones share it.
#[derive(Clone)]
pub struct Paginator {
    store: Arc<dyn RangeStore>,
    session: Arc<Mutex<SearchSession>>,
    page_size: usize,
}

impl Paginator {
    pub fn new(store: Arc<dyn RangeStore>, config: &SearchConfig) -> Self {
        Self {
            store,
            session: Arc::new(Mutex::new(SearchSession::default())),
            page_size: config.validated().page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> SearchSession {
        self.session.lock().clone()
    }

    /// Hide the current error without touching results.
    pub fn dismiss_error(&self) -> SearchSession {
        let mut session = self.session.lock();
        session.dismiss_error();
        session.clone()
    }

    /// Empty the session. Responses still in flight will be discarded.
    pub fn clear(&self) -> SearchSession {
        let mut session = self.session.lock();
        session.reset();
        session.clone()
    }

    /// Search both collections for `term`, replacing the session.
    ///
    /// A blank term clears the session without touching the store.
    #[instrument(skip(self), fields(page_size = self.page_size))]
    pub async fn search(&self, term: &str) -> SearchSession {
        let key = search_key(term);
        let planned = self.session.lock().begin_search(term, key, self.page_size);
        let Some((generation, posts, users)) = planned else {
            return self.clear();
        };

        debug!(generation, lower = %posts.lower, "issuing first pages");
        let (posts, users) = tokio::join!(self.fetch(&posts), self.fetch(&users));
        let pages = match (posts, users) {
            (Ok(posts), Ok(users)) => Ok((posts, users)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        };

        let mut session = self.session.lock();
        session.complete_search(generation, pages, self.page_size);
        session.clone()
    }

    /// Fetch the next page of `kind` and append it after that kind's items.
    ///
    /// No-op when the kind is exhausted, already loading, or nothing has been
    /// searched yet.
    #[instrument(skip(self))]
    pub async fn load_more(&self, kind: EntityKind) -> SearchSession {
        let planned = self.session.lock().begin_load_more(kind, self.page_size);
        let Some((generation, query)) = planned else {
            return self.session();
        };

        let page = self.fetch(&query).await;

        let mut session = self.session.lock();
        session.complete_load_more(generation, kind, page, self.page_size);
        session.clone()
    }

    /// Load the next page of every kind that may have more, concurrently.
    pub async fn load_more_all(&self) -> SearchSession {
        tokio::join!(
            self.load_more(EntityKind::Post),
            self.load_more(EntityKind::User)
        );
        self.session()
    }

    /// A debounced trigger for [`search`](Self::search).
    pub fn debounced(&self, delay: Duration) -> Debouncer<String> {
        let paginator = self.clone();
        Debouncer::new(delay, move |term: String| {
            let paginator = paginator.clone();
            async move {
                paginator.search(&term).await;
            }
        })
    }

    async fn fetch(&self, query: &RangeQuery) -> Result<Vec<SearchableEntity>, SearchError> {
        match self.store.range(query).await {
            Ok(page) => {
                check_page_kind(query.kind, &page);
                debug!(kind = %query.kind, returned = page.len(), "page received");
                Ok(page)
            }
            Err(source) => {
                warn!(kind = %query.kind, error = %source, "range query failed");
                Err(SearchError::query(query.kind, source))
            }
        }
    }
}
