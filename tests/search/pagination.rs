//! Paging through a term with per-kind cursors.

use std::collections::HashSet;

use super::common::{ids, memory_paginator, twelve_rust_posts};
use sift::testing::{post_record, user_record};
use sift::{EntityKind, MemoryStore};

#[tokio::test]
async fn twelve_posts_page_as_five_five_two() {
    let (paginator, store) = memory_paginator(twelve_rust_posts(), 5);

    let session = paginator.search("rust").await;
    assert_eq!(session.posts().count(), 5);
    assert!(!session.is_exhausted(EntityKind::Post));

    let session = paginator.load_more(EntityKind::Post).await;
    assert_eq!(session.posts().count(), 10);
    assert!(!session.is_exhausted(EntityKind::Post));

    let session = paginator.load_more(EntityKind::Post).await;
    assert_eq!(session.posts().count(), 12);
    assert!(session.is_exhausted(EntityKind::Post));

    let served = store.queries_served();
    let session = paginator.load_more(EntityKind::Post).await;
    assert_eq!(session.posts().count(), 12);
    assert_eq!(store.queries_served(), served, "exhausted kind must not query");
}

#[tokio::test]
async fn pages_are_ordered_and_disjoint() {
    let (paginator, _) = memory_paginator(twelve_rust_posts(), 5);

    paginator.search("rust").await;
    paginator.load_more(EntityKind::Post).await;
    let session = paginator.load_more(EntityKind::Post).await;

    let ids = ids(&session, EntityKind::Post);
    let expected: Vec<String> = (0..12).map(|i| format!("p{i:02}")).collect();
    assert_eq!(ids, expected);

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn turkish_letters_match_their_ascii_prefix() {
    let store = MemoryStore::new();
    store.put_post(&post_record("p1", "İstanbul Notları"));
    store.put_post(&post_record("p2", "Işıklar"));
    store.put_user(&user_record("u1", "Şule"));
    let (paginator, _) = memory_paginator(store, 5);

    for term in ["ist", "İST", "Ist", "  ist"] {
        let session = paginator.search(term).await;
        assert_eq!(ids(&session, EntityKind::Post), ["p1"], "term {term:?}");
    }

    let session = paginator.search("isi").await;
    assert_eq!(ids(&session, EntityKind::Post), ["p2"]);

    let session = paginator.search("su").await;
    assert_eq!(ids(&session, EntityKind::User), ["u1"]);
}

#[tokio::test]
async fn equal_keys_page_by_id() {
    let store = MemoryStore::new();
    for id in ["a", "b", "c", "d"] {
        store.put_user(&user_record(id, "Deniz"));
    }
    let (paginator, _) = memory_paginator(store, 3);

    paginator.search("deniz").await;
    let session = paginator.load_more(EntityKind::User).await;

    assert_eq!(ids(&session, EntityKind::User), ["a", "b", "c", "d"]);
    assert!(session.is_exhausted(EntityKind::User));
}
