//! A short page ends a kind's stream; the other kind keeps going.

use super::common::{memory_paginator, rust_blog};
use sift::{EntityKind, ViewState};

#[tokio::test]
async fn short_kind_exhausts_while_other_continues() {
    let (paginator, store) = memory_paginator(rust_blog(3, 12), 5);

    let session = paginator.search("rust").await;
    assert_eq!(session.posts().count(), 3);
    assert_eq!(session.users().count(), 5);
    assert!(session.is_exhausted(EntityKind::Post));
    assert!(!session.is_exhausted(EntityKind::User));
    assert!(session.has_more());

    let before = store.queries_served();
    let session = paginator.load_more_all().await;
    assert_eq!(store.queries_served(), before + 1, "only users are queried");
    assert_eq!(session.posts().count(), 3);
    assert_eq!(session.users().count(), 10);

    let session = paginator.load_more_all().await;
    assert_eq!(session.users().count(), 12);
    assert!(session.is_exhausted(EntityKind::User));
    assert!(!session.has_more());
}

#[tokio::test]
async fn full_final_page_needs_one_empty_fetch() {
    let (paginator, store) = memory_paginator(rust_blog(5, 0), 5);

    let session = paginator.search("rust").await;
    assert!(!session.is_exhausted(EntityKind::Post));

    let before = store.queries_served();
    let session = paginator.load_more(EntityKind::Post).await;
    assert_eq!(store.queries_served(), before + 1);
    assert_eq!(session.posts().count(), 5);
    assert!(session.is_exhausted(EntityKind::Post));
}

#[tokio::test]
async fn no_matches_is_distinct_from_loading() {
    let (paginator, _) = memory_paginator(rust_blog(3, 3), 5);

    let session = paginator.search("python").await;
    assert!(session.is_empty());
    assert_eq!(session.view_state(), ViewState::NoResults);
    assert!(!session.has_more());
}
