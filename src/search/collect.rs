// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Every match for a term, grouped by kind.
//!
//! The full results page lists all matches at once. It still walks the
//! collections page by page: a single unbounded scan is never issued.

use tracing::debug;

use crate::error::SearchError;
use crate::query::{build_range_query, search_key};
use crate::store::RangeStore;
use crate::types::{EntityKind, NormalizedKey, SearchableEntity};

/// All matches of `term`: every post, then every user, each in key order.
///
/// Returns an empty list for a blank term without querying.
pub async fn collect_all(
    store: &dyn RangeStore,
    term: &str,
    page_size: usize,
) -> Result<Vec<SearchableEntity>, SearchError> {
    let key = search_key(term);
    if key.is_blank() {
        return Ok(Vec::new());
    }

    let (posts, users) = tokio::join!(
        drain(store, EntityKind::Post, &key, page_size),
        drain(store, EntityKind::User, &key, page_size)
    );
    let mut all = posts?;
    all.extend(users?);
    Ok(all)
}

async fn drain(
    store: &dyn RangeStore,
    kind: EntityKind,
    key: &NormalizedKey,
    page_size: usize,
) -> Result<Vec<SearchableEntity>, SearchError> {
    let mut all: Vec<SearchableEntity> = Vec::new();
    let mut pages = 0usize;
    loop {
        let cursor = all.last().map(SearchableEntity::cursor);
        let Some(query) = build_range_query(kind, key, cursor.as_ref(), page_size) else {
            break;
        };
        let page = store
            .range(&query)
            .await
            .map_err(|source| SearchError::query(kind, source))?;
        pages += 1;

        let done = page.len() < query.limit;
        all.extend(page);
        if done {
            break;
        }
    }
    debug!(%kind, pages, total = all.len(), "stream drained");
    Ok(all)
}
