//! Prefix scans against the in-memory store.

use sift::testing::seeded_store;
use sift::{build_range_query, search_key, EntityKind, MemoryStore, RangeStore};

async fn usernames(store: &MemoryStore, term: &str) -> Vec<String> {
    let query = build_range_query(EntityKind::User, &search_key(term), None, 10).unwrap();
    store
        .range(&query)
        .await
        .unwrap()
        .iter()
        .map(|entity| entity.key().to_string())
        .collect()
}

#[tokio::test]
async fn al_matches_ali_and_alice_only() {
    let store = seeded_store(&[], &["ali", "alice", "bob", "zeynep"]);

    assert_eq!(usernames(&store, "al").await, ["ali", "alice"]);
    assert_eq!(usernames(&store, "ali").await, ["ali", "alice"]);
    assert_eq!(usernames(&store, "alic").await, ["alice"]);
    assert_eq!(usernames(&store, "b").await, ["bob"]);
    assert!(usernames(&store, "c").await.is_empty());
}

#[tokio::test]
async fn match_is_prefix_not_substring() {
    let store = seeded_store(&[], &["zeynep", "pınar"]);

    assert!(usernames(&store, "eyn").await.is_empty());
    assert_eq!(usernames(&store, "Pı").await, ["pinar"]);
}

#[tokio::test]
async fn posts_and_users_are_scanned_separately() {
    let store = seeded_store(&["Ali'nin Günlüğü"], &["ali"]);

    let query = build_range_query(EntityKind::Post, &search_key("ali"), None, 10).unwrap();
    let posts = store.range(&query).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].kind(), EntityKind::Post);
    assert_eq!(posts[0].href(), "/blog/p0");

    assert_eq!(usernames(&store, "ali").await, ["ali"]);
}
