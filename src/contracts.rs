// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts on what a store hands back.
//!
//! Debug-mode assertions only: zero cost in release builds, early failure in
//! tests when a [`RangeStore`](crate::store::RangeStore) implementation breaks
//! the ordering the paginator relies on.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract               | Property                                           |
//! |------------------------|----------------------------------------------------|
//! | `check_page_sorted`    | a page is strictly ascending in `(key, id)`        |
//! | `check_page_follows`   | a page starts strictly after the cursor it resumed |
//! | `check_page_kind`      | a page only holds entities of the queried kind     |

use crate::types::{Cursor, EntityKind, SearchableEntity};

fn position(entity: &SearchableEntity) -> (&str, &str) {
    (entity.key().as_str(), entity.id())
}

/// Check that a page is strictly ascending in `(key, id)`.
///
/// # Panics (debug builds only)
/// Panics on the first pair of neighbours out of order or equal.
#[inline]
pub fn check_page_sorted(page: &[SearchableEntity]) {
    debug_assert!(
        page.windows(2).all(|pair| position(&pair[0]) < position(&pair[1])),
        "Contract violation: page not strictly ascending: {:?}",
        page.iter().map(position).collect::<Vec<_>>()
    );
}

/// Check that a page continues strictly after `cursor`.
///
/// Together with [`check_page_sorted`] this rules out duplicates across pages
/// of one stream.
///
/// # Panics (debug builds only)
/// Panics if the page is unsorted or its first entity is at or before the cursor.
#[inline]
pub fn check_page_follows(cursor: Option<&Cursor>, page: &[SearchableEntity]) {
    check_page_sorted(page);
    if let (Some(cursor), Some(first)) = (cursor, page.first()) {
        debug_assert!(
            position(first) > (cursor.key().as_str(), cursor.id()),
            "Contract violation: page starts at {:?}, not after cursor ({:?}, {:?})",
            position(first),
            cursor.key().as_str(),
            cursor.id()
        );
    }
}

/// Check that every entity in a page has the queried kind.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_page_kind(kind: EntityKind, page: &[SearchableEntity]) {
    debug_assert!(
        page.iter().all(|entity| entity.kind() == kind),
        "Contract violation: {} page contains another kind",
        kind
    );
}
