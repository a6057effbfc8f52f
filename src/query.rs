// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix queries expressed as range scans.
//!
//! The document store only knows ordered range scans, not "starts with". A
//! prefix search for `t` is therefore the range `t <= key <= t + SENTINEL`,
//! where the sentinel sorts after every character that can follow `t` in a
//! stored key. Pages are taken in `(key, id)` order, resuming strictly after
//! the cursor of the previous page.
//!
//! An empty prefix would cover the whole collection, so no query is ever
//! planned for a blank term.

use crate::types::{Cursor, EntityKind, NormalizedKey};

/// Appended to the term to form the upper bound.
///
/// `char::MAX` (U+10FFFF) is the largest scalar value and sorts last in both
/// code-point and UTF-8 byte order.
pub const HIGH_SENTINEL: char = char::MAX;

/// Parameters of one page of a prefix scan over one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeQuery {
    pub kind: EntityKind,
    /// Inclusive lower bound (the term itself).
    pub lower: String,
    /// Inclusive upper bound (the term followed by [`HIGH_SENTINEL`]).
    pub upper: String,
    /// Maximum number of entities to return.
    pub limit: usize,
    /// Resume strictly after this position, if set.
    pub start_after: Option<Cursor>,
}

impl RangeQuery {
    /// Collection the query runs against.
    pub fn collection(&self) -> &'static str {
        self.kind.collection()
    }

    /// Field the range and the ordering apply to.
    pub fn field(&self) -> &'static str {
        self.kind.key_field()
    }

    /// Whether a stored `(key, id)` falls inside this page's window.
    ///
    /// This is the predicate a store evaluates; the limit is applied on top.
    pub fn admits(&self, key: &str, id: &str) -> bool {
        if key < self.lower.as_str() || key > self.upper.as_str() {
            return false;
        }
        match &self.start_after {
            Some(cursor) => (key, id) > (cursor.key().as_str(), cursor.id()),
            None => true,
        }
    }
}

/// Plan one page of a prefix scan.
///
/// Returns `None` for a blank term: the caller must not scan.
/// A `page_size` of zero is treated as one.
pub fn build_range_query(
    kind: EntityKind,
    term: &NormalizedKey,
    cursor: Option<&Cursor>,
    page_size: usize,
) -> Option<RangeQuery> {
    if term.is_blank() {
        return None;
    }

    let lower = term.as_str().to_string();
    let mut upper = String::with_capacity(lower.len() + HIGH_SENTINEL.len_utf8());
    upper.push_str(&lower);
    upper.push(HIGH_SENTINEL);

    Some(RangeQuery {
        kind,
        lower,
        upper,
        limit: page_size.max(1),
        start_after: cursor.cloned(),
    })
}

/// Turn raw user input into the search key used for planning.
///
/// Leading whitespace is dropped; anything after the first visible character
/// is part of the prefix, as typed.
pub fn search_key(raw: &str) -> NormalizedKey {
    NormalizedKey::from_text(raw.trim_start())
}
