// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The write path: records in, keyed entities out.
//!
//! Whenever a post title or a username changes, its key has to be recomputed
//! and stored with the rest of the record. This module does that for a JSON
//! export of the store (`sift index`), and turns a dataset into a
//! [`MemoryStore`] for searching.

pub mod document;
pub mod parallel;

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::DatasetError;
use crate::store::MemoryStore;

pub use document::*;
pub use parallel::*;

/// Create a progress style for the reindex progress bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

impl Dataset {
    /// Read and validate a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset: Dataset =
            serde_json::from_str(&content).map_err(|source| DatasetError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        dataset.check_unique_ids()?;
        Ok(dataset)
    }

    /// Write the dataset as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), DatasetError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| DatasetError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load every record into a fresh store, keys recomputed on insert.
    pub fn to_store(&self) -> MemoryStore {
        let store = MemoryStore::new();
        for post in &self.posts {
            store.put_post(post);
        }
        for user in &self.users {
            store.put_user(user);
        }
        store
    }
}

/// Recompute every stored key in `input` and write the result to `output`.
pub fn run_index(input: &Path, output: &Path) -> Result<ReindexStats, DatasetError> {
    let mut dataset = Dataset::load(input)?;

    #[cfg(feature = "parallel")]
    let stats = {
        let progress = ProgressBar::new(dataset.len() as u64);
        progress.set_style(create_progress_style());
        progress.set_prefix("Indexing");
        let stats = reindex_with_progress(&mut dataset, &progress);
        progress.finish_and_clear();
        stats
    };
    #[cfg(not(feature = "parallel"))]
    let stats = reindex_with_progress(&mut dataset);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| DatasetError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    dataset.save(output)?;

    info!(
        posts = stats.posts,
        users = stats.users,
        rewritten = stats.rewritten,
        output = %output.display(),
        "dataset indexed"
    );
    Ok(stats)
}
