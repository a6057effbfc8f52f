// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix search over posts and users with cursor pagination.
//!
//! A term is normalized with Turkish-aware folding, turned into one ordered
//! range scan per collection, and paged through with a `(key, id)` cursor per
//! kind. Only the latest term's responses are ever applied; typing is
//! debounced before it reaches the store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  utils.rs   │────▶│  query.rs    │────▶│  store.rs    │
//! │ (normalize) │     │ (RangeQuery) │     │ (RangeStore) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                     │
//!        ▼                   ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                       search/                           │
//! │  (SearchSession, Paginator, SearchInput, collect_all)   │
//! └─────────────────────────────────────────────────────────┘
//!                            ▲
//!                            │
//!                   ┌──────────────────┐
//!                   │   debounce.rs    │
//!                   │   (Debouncer)    │
//!                   └──────────────────┘
//! ```
//!
//! The write side lives in `build` (records, datasets, rekeying) and `verify`
//! (stored keys that no longer match the normalizer).
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use sift::{EntityKind, MemoryStore, Paginator, SearchConfig};
//!
//! let store = Arc::new(MemoryStore::new());
//! let paginator = Paginator::new(store, &SearchConfig::default());
//!
//! let session = paginator.search("İst").await;
//! let session = paginator.load_more(EntityKind::Post).await;
//! ```

pub mod build;
pub mod config;
pub mod contracts;
pub mod debounce;
pub mod error;
pub mod logging;
pub mod query;
pub mod search;
pub mod store;
pub mod testing;
pub mod types;
pub mod utils;
pub mod verify;

// Re-exports for public API
pub use build::{run_index, Dataset, PostRecord, ReindexStats, UserRecord};
pub use config::{SearchConfig, DEFAULT_DEBOUNCE, DEFAULT_PAGE_SIZE};
pub use debounce::Debouncer;
pub use error::{DatasetError, SearchError, StoreError};
pub use query::{build_range_query, search_key, RangeQuery, HIGH_SENTINEL};
pub use search::{collect_all, Paginator, SearchInput, SearchSession, StreamStatus, ViewState};
pub use store::{MemoryStore, RangeStore};
pub use types::{Cursor, EntityKind, NormalizedKey, PostHit, SearchableEntity, UserHit};
pub use utils::{normalize, normalize_field};
pub use verify::{verify_dataset, KeyDrift, VerificationReport};
