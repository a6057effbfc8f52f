//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::Arc;

use sift::testing::{post_record, user_record, ScriptedStore};
use sift::{EntityKind, MemoryStore, Paginator, SearchConfig, SearchSession};

/// Twelve posts titled "Rust 00" to "Rust 11", plus unrelated noise.
pub fn twelve_rust_posts() -> MemoryStore {
    let store = MemoryStore::new();
    for i in 0..12 {
        store.put_post(&post_record(&format!("p{i:02}"), &format!("Rust {i:02}")));
    }
    store.put_post(&post_record("noise-1", "Go Concurrency"));
    store.put_post(&post_record("noise-2", "Ruby Gems"));
    store
}

/// `posts` posts and `users` users all matching "rust".
pub fn rust_blog(posts: usize, users: usize) -> MemoryStore {
    let store = MemoryStore::new();
    for i in 0..posts {
        store.put_post(&post_record(&format!("p{i:02}"), &format!("Rust tip {i:02}")));
    }
    for i in 0..users {
        store.put_user(&user_record(&format!("u{i:02}"), &format!("rustacean{i:02}")));
    }
    store
}

/// A store with posts and users for "cat" and "dog".
pub fn pets() -> MemoryStore {
    let store = MemoryStore::new();
    store.put_post(&post_record("p-cat", "Cats of Istanbul"));
    store.put_post(&post_record("p-dog", "Dogs of Ankara"));
    store.put_user(&user_record("u-cat", "catlover"));
    store.put_user(&user_record("u-dog", "doglover"));
    store
}

pub fn paginator(store: Arc<ScriptedStore>, page_size: usize) -> Paginator {
    Paginator::new(store, &SearchConfig::default().with_page_size(page_size))
}

pub fn memory_paginator(store: MemoryStore, page_size: usize) -> (Paginator, Arc<MemoryStore>) {
    let store = Arc::new(store);
    let paginator = Paginator::new(
        store.clone(),
        &SearchConfig::default().with_page_size(page_size),
    );
    (paginator, store)
}

/// Ids of `kind` in session order.
pub fn ids(session: &SearchSession, kind: EntityKind) -> Vec<String> {
    session
        .results()
        .filter(|entity| entity.kind() == kind)
        .map(|entity| entity.id().to_string())
        .collect()
}

/// Normalized terms of every query the store received, in order.
pub fn queried_terms(store: &ScriptedStore) -> Vec<String> {
    store.queries().into_iter().map(|query| query.lower).collect()
}
