// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The paginator turns every backing-store failure into a [`SearchError`], so
//! a caller has one shape to render no matter which collection failed.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::EntityKind;

/// Failure reported by a [`RangeStore`](crate::store::RangeStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or timed out.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the query (missing index, bad bounds, permissions).
    #[error("query rejected: {0}")]
    Rejected(String),
}

/// A search or load-more that did not complete.
///
/// Retryable: issuing the same `search` or `load_more` again is the recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search failed while querying {kind}s: {source}")]
    Query {
        kind: EntityKind,
        #[source]
        source: StoreError,
    },
}

impl SearchError {
    pub(crate) fn query(kind: EntityKind, source: StoreError) -> Self {
        SearchError::Query { kind, source }
    }

    /// Which kind's query failed.
    pub fn kind(&self) -> EntityKind {
        match self {
            SearchError::Query { kind, .. } => *kind,
        }
    }
}

/// Failure importing or exporting a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntityKind, id: String },
}
