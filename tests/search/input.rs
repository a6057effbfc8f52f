//! Typing into the search box goes through the debouncer.

use std::time::Duration;

use super::common::{paginator, pets, queried_terms};
use sift::testing::ScriptedStore;
use sift::{SearchConfig, SearchInput, ViewState};

fn input(store: &std::sync::Arc<ScriptedStore>) -> SearchInput {
    let config = SearchConfig::default().with_debounce(Duration::from_millis(400));
    SearchInput::new(paginator(store.clone(), 5), &config)
}

async fn pause(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn burst_of_keystrokes_searches_once_for_the_last_text() {
    let store = ScriptedStore::new(pets());
    let input = input(&store);

    input.on_input("d");
    pause(100).await;
    input.on_input("do");
    pause(100).await;
    input.on_input("dog");
    assert!(input.is_pending());
    assert!(store.queries().is_empty());

    pause(500).await;
    assert!(!input.is_pending());
    assert_eq!(queried_terms(&store), ["dog", "dog"]);
    assert_eq!(input.session().term(), "dog");
    assert_eq!(input.session().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn spaced_keystrokes_each_search() {
    let store = ScriptedStore::new(pets());
    let input = input(&store);

    input.on_input("c");
    pause(500).await;
    input.on_input("ca");
    pause(500).await;

    assert_eq!(queried_terms(&store), ["c", "c", "ca", "ca"]);
}

#[tokio::test(start_paused = true)]
async fn clearing_the_box_cancels_and_resets() {
    let store = ScriptedStore::new(pets());
    let input = input(&store);

    input.submit("cat").await;
    assert_eq!(input.session().len(), 2);

    input.on_input("dog");
    pause(100).await;
    input.on_input("   ");
    assert!(!input.is_pending());
    assert_eq!(input.session().view_state(), ViewState::Idle);

    pause(1000).await;
    assert_eq!(queried_terms(&store), ["cat", "cat"]);
    assert!(input.session().is_empty());
}

#[tokio::test(start_paused = true)]
async fn submit_skips_the_wait() {
    let store = ScriptedStore::new(pets());
    let input = input(&store);

    input.on_input("ca");
    let session = input.submit("cat").await;
    assert_eq!(session.len(), 2);

    pause(1000).await;
    assert_eq!(queried_terms(&store), ["cat", "cat"]);
}
