// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Records as they sit in the document store export.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::types::{EntityKind, NormalizedKey, PostHit, UserHit};
use crate::utils::normalize_field;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Stored key. Absent on records written before keys were indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_normalized: Option<String>,
}

impl PostRecord {
    /// Key the write path stores for this post.
    pub fn search_key(&self) -> NormalizedKey {
        NormalizedKey::from_normalized(normalize_field(Some(&self.title)))
    }

    pub fn to_hit(&self) -> PostHit {
        PostHit {
            id: self.id.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            author_id: self.author_id.clone(),
            title_normalized: self.search_key(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_normalized: Option<String>,
}

impl UserRecord {
    /// Key the write path stores for this user: the username, or the display
    /// name for accounts that never picked one.
    pub fn search_key(&self) -> NormalizedKey {
        let source = self
            .username
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.display_name.as_deref());
        NormalizedKey::from_normalized(normalize_field(source))
    }

    pub fn to_hit(&self) -> UserHit {
        UserHit {
            id: self.id.clone(),
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            photo_url: self.photo_url.clone(),
            username_normalized: self.search_key(),
        }
    }
}

/// A JSON export of both searchable collections.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    #[serde(default)]
    pub posts: Vec<PostRecord>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

impl Dataset {
    /// Reject datasets where an id appears twice within one collection.
    pub fn check_unique_ids(&self) -> Result<(), DatasetError> {
        first_duplicate(self.posts.iter().map(|post| post.id.as_str()))
            .map(|id| duplicate(EntityKind::Post, id))
            .or_else(|| {
                first_duplicate(self.users.iter().map(|user| user.id.as_str()))
                    .map(|id| duplicate(EntityKind::User, id))
            })
            .map_or(Ok(()), Err)
    }

    pub fn len(&self) -> usize {
        self.posts.len() + self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.users.is_empty()
    }
}

fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

fn duplicate(kind: EntityKind, id: &str) -> DatasetError {
    DatasetError::DuplicateId {
        kind,
        id: id.to_string(),
    }
}
