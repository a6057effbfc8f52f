// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for range planning and scanning.
//!
//! Builds a small store from arbitrary names, then checks that a planned
//! prefix scan returns exactly what a brute-force `starts_with` would, in
//! `(key, id)` order, one page at a time.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift::testing::user_record;
use sift::{build_range_query, normalize, search_key, EntityKind, MemoryStore, RangeStore};

#[derive(Arbitrary, Debug)]
struct Input {
    names: Vec<String>,
    term: String,
    page_size: u8,
}

fuzz_target!(|input: Input| {
    let names: Vec<String> = input.names.into_iter().take(64).collect();
    let store = MemoryStore::new();
    for (i, name) in names.iter().enumerate() {
        store.put_user(&user_record(&format!("u{i:03}"), name));
    }

    let key = search_key(&input.term);
    let page_size = usize::from(input.page_size % 8);

    // INVARIANT 1: blank terms are never planned
    if key.is_blank() {
        assert!(build_range_query(EntityKind::User, &key, None, page_size).is_none());
        return;
    }

    let mut expected: Vec<(String, String)> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (normalize(name), format!("u{i:03}")))
        .filter(|(stored, _)| stored.starts_with(key.as_str()))
        .collect();
    expected.sort();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let mut seen = Vec::new();
    let mut cursor = None;
    loop {
        let query = build_range_query(EntityKind::User, &key, cursor.as_ref(), page_size)
            .expect("non-blank term is planned");
        let page = runtime.block_on(store.range(&query)).expect("memory store never fails");

        // INVARIANT 2: pages never exceed their limit
        assert!(page.len() <= query.limit);
        let done = page.len() < query.limit;
        if let Some(last) = page.last() {
            cursor = Some(last.cursor());
        }
        seen.extend(page.iter().map(|entity| (entity.key().to_string(), entity.id().to_string())));
        if done {
            break;
        }
    }

    // INVARIANT 3: paging visits every prefix match once, in order
    assert_eq!(seen, expected);
});
