// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Key recomputation across a whole dataset.
//!
//! Every record is independent, so with the `parallel` feature the work is a
//! `par_iter_mut()` over each collection. Without it, the same closure runs
//! sequentially. Either way the keys come from the same `normalize` the read
//! path uses.

use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{Dataset, PostRecord, UserRecord};

/// How many stored keys a reindex pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReindexStats {
    pub posts: usize,
    pub users: usize,
    /// Records whose stored key was missing or differed from the recomputed one.
    pub rewritten: usize,
}

fn reindex_post(post: &mut PostRecord) -> bool {
    let key = post.search_key().as_str().to_string();
    let changed = post.title_normalized.as_deref() != Some(key.as_str());
    post.title_normalized = Some(key);
    changed
}

fn reindex_user(user: &mut UserRecord) -> bool {
    let key = user.search_key().as_str().to_string();
    let changed = user.username_normalized.as_deref() != Some(key.as_str());
    user.username_normalized = Some(key);
    changed
}

/// Recompute and store the key of every record in parallel.
#[cfg(feature = "parallel")]
pub fn reindex_with_progress(dataset: &mut Dataset, progress: &ProgressBar) -> ReindexStats {
    let done = AtomicUsize::new(0);
    let rewritten = AtomicUsize::new(0);
    let tick = |changed: bool| {
        if changed {
            rewritten.fetch_add(1, Ordering::Relaxed);
        }
        let count = done.fetch_add(1, Ordering::Relaxed) + 1;
        if count % 256 == 0 {
            progress.set_position(count as u64);
        }
    };

    dataset.posts.par_iter_mut().for_each(|post| tick(reindex_post(post)));
    dataset.users.par_iter_mut().for_each(|user| tick(reindex_user(user)));
    progress.set_position(done.load(Ordering::Relaxed) as u64);

    ReindexStats {
        posts: dataset.posts.len(),
        users: dataset.users.len(),
        rewritten: rewritten.into_inner(),
    }
}

/// Recompute and store the key of every record.
#[cfg(not(feature = "parallel"))]
pub fn reindex_with_progress(dataset: &mut Dataset) -> ReindexStats {
    let rewritten = AtomicUsize::new(0);
    let tick = |changed: bool| {
        if changed {
            rewritten.fetch_add(1, Ordering::Relaxed);
        }
    };

    dataset.posts.iter_mut().for_each(|post| tick(reindex_post(post)));
    dataset.users.iter_mut().for_each(|user| tick(reindex_user(user)));

    ReindexStats {
        posts: dataset.posts.len(),
        users: dataset.users.len(),
        rewritten: rewritten.into_inner(),
    }
}

/// Recompute keys without progress reporting.
pub fn reindex(dataset: &mut Dataset) -> ReindexStats {
    #[cfg(feature = "parallel")]
    {
        reindex_with_progress(dataset, &ProgressBar::hidden())
    }
    #[cfg(not(feature = "parallel"))]
    {
        reindex_with_progress(dataset)
    }
}
