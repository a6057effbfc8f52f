//! Paging invariants: complete, ordered, duplicate-free.

use std::sync::Arc;

use proptest::prelude::*;
use sift::testing::user_record;
use sift::{collect_all, normalize, EntityKind, MemoryStore, Paginator, SearchConfig};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Usernames over a tiny alphabet so prefixes collide and keys repeat.
fn usernames() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[abcAÇ]{1,4}").unwrap(), 0..30)
}

fn prefix() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcç]{1,2}").unwrap()
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn store(names: &[String]) -> MemoryStore {
    let store = MemoryStore::new();
    for (i, name) in names.iter().enumerate() {
        store.put_user(&user_record(&format!("u{i:02}"), name));
    }
    store
}

/// Ids a brute-force filter says should match, in `(key, id)` order.
fn expected(names: &[String], term: &str) -> Vec<String> {
    let term = normalize(term);
    let mut matches: Vec<(String, String)> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (normalize(name), format!("u{i:02}")))
        .filter(|(key, _)| key.starts_with(&term))
        .collect();
    matches.sort();
    matches.into_iter().map(|(_, id)| id).collect()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn load_more_until_exhausted_visits_every_match_once(
        names in usernames(),
        term in prefix(),
        page_size in 1usize..6,
    ) {
        let paginator = Paginator::new(
            Arc::new(store(&names)),
            &SearchConfig::default().with_page_size(page_size),
        );

        let session = runtime().block_on(async {
            let mut session = paginator.search(&term).await;
            while !session.is_exhausted(EntityKind::User) {
                session = paginator.load_more(EntityKind::User).await;
            }
            session
        });

        let ids: Vec<String> = session.users().map(|user| user.id.clone()).collect();
        prop_assert_eq!(ids, expected(&names, &term));
    }

    #[test]
    fn collect_all_matches_brute_force(
        names in usernames(),
        term in prefix(),
        page_size in 1usize..6,
    ) {
        let store = store(&names);
        let all = runtime().block_on(collect_all(&store, &term, page_size)).unwrap();

        let ids: Vec<String> = all.iter().map(|entity| entity.id().to_string()).collect();
        prop_assert_eq!(ids, expected(&names, &term));
    }
}
