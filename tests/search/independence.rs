//! Posts and users page independently of each other.

use std::time::Duration;

use super::common::{paginator, rust_blog};
use sift::testing::{Behaviour, ScriptedStore};
use sift::EntityKind;

#[tokio::test(start_paused = true)]
async fn slow_posts_do_not_block_users() {
    let store = ScriptedStore::new(rust_blog(6, 6));
    let paginator = paginator(store.clone(), 2);
    paginator.search("rust").await;

    store.set(EntityKind::Post, "rust", Behaviour::Delay(Duration::from_secs(1)));
    let posts = tokio::spawn({
        let paginator = paginator.clone();
        async move { paginator.load_more(EntityKind::Post).await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(paginator.session().is_loading(EntityKind::Post));

    let session = paginator.load_more(EntityKind::User).await;
    assert_eq!(session.users().count(), 4);
    assert_eq!(session.posts().count(), 2);
    assert!(session.is_loading(EntityKind::Post));
    assert!(!session.is_loading(EntityKind::User));

    let session = posts.await.unwrap();
    assert_eq!(session.posts().count(), 4);
    assert_eq!(session.users().count(), 4);
    assert!(!session.is_busy());
}

#[tokio::test(start_paused = true)]
async fn second_load_more_for_a_loading_kind_is_ignored() {
    let store = ScriptedStore::new(rust_blog(6, 0));
    let paginator = paginator(store.clone(), 2);
    paginator.search("rust").await;

    store.set(EntityKind::Post, "rust", Behaviour::Delay(Duration::from_millis(200)));
    let first = tokio::spawn({
        let paginator = paginator.clone();
        async move { paginator.load_more(EntityKind::Post).await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    let queries = store.queries().len();
    let session = paginator.load_more(EntityKind::Post).await;
    assert_eq!(store.queries().len(), queries);
    assert_eq!(session.posts().count(), 2);

    let session = first.await.unwrap();
    assert_eq!(session.posts().count(), 4);
}

#[tokio::test]
async fn load_more_all_appends_each_kind_after_its_own_items() {
    let store = ScriptedStore::new(rust_blog(4, 4));
    let paginator = paginator(store, 2);

    paginator.search("rust").await;
    let session = paginator.load_more_all().await;

    let kinds: Vec<EntityKind> = session.results().map(|entity| entity.kind()).collect();
    assert_eq!(
        kinds,
        [
            EntityKind::Post,
            EntityKind::Post,
            EntityKind::Post,
            EntityKind::Post,
            EntityKind::User,
            EntityKind::User,
            EntityKind::User,
            EntityKind::User,
        ]
    );
}
