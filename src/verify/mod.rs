// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catching drift between stored keys and the normalizer.
//!
//! A stored key is only useful if it equals what `normalize` produces today
//! for the field it was derived from. Records written by an older client, or
//! edited without their key, silently drop out of prefix matches. This module
//! recomputes every key in a dataset and reports the ones that disagree.
//!
//! Missing keys count as drift too: such a record is invisible to search.

use std::fmt;

use thiserror::Error;

use crate::build::Dataset;
use crate::types::EntityKind;

/// One record whose stored key disagrees with its recomputed key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} '{id}': stored key {stored:?} but field normalizes to {expected:?}")]
pub struct KeyDrift {
    pub kind: EntityKind,
    pub id: String,
    /// `None` when the record carries no key at all.
    pub stored: Option<String>,
    pub expected: String,
}

/// Outcome of checking a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub posts_checked: usize,
    pub users_checked: usize,
    pub drifts: Vec<KeyDrift>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.drifts.is_empty()
    }

    /// Drifted records of one kind.
    pub fn drifted(&self, kind: EntityKind) -> usize {
        self.drifts.iter().filter(|drift| drift.kind == kind).count()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} posts, {} users checked: {} drifted ({} posts, {} users)",
            self.posts_checked,
            self.users_checked,
            self.drifts.len(),
            self.drifted(EntityKind::Post),
            self.drifted(EntityKind::User)
        )
    }
}

fn check(kind: EntityKind, id: &str, stored: Option<&str>, expected: &str) -> Option<KeyDrift> {
    (stored != Some(expected)).then(|| KeyDrift {
        kind,
        id: id.to_string(),
        stored: stored.map(str::to_string),
        expected: expected.to_string(),
    })
}

/// Recompute every key in `dataset` and report mismatches, posts first.
pub fn verify_dataset(dataset: &Dataset) -> VerificationReport {
    let posts = dataset.posts.iter().filter_map(|post| {
        check(
            EntityKind::Post,
            &post.id,
            post.title_normalized.as_deref(),
            post.search_key().as_str(),
        )
    });
    let users = dataset.users.iter().filter_map(|user| {
        check(
            EntityKind::User,
            &user.id,
            user.username_normalized.as_deref(),
            user.search_key().as_str(),
        )
    });

    VerificationReport {
        posts_checked: dataset.posts.len(),
        users_checked: dataset.users.len(),
        drifts: posts.chain(users).collect(),
    }
}
