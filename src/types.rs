// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search session.
//!
//! Two kinds of entity are searchable: posts (keyed on their title) and users
//! (keyed on their username). Both carry a [`NormalizedKey`] computed on the
//! write path, so nothing is normalized when results are read back.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **NormalizedKey**: `key == normalize(key)`. Construct through
//!   [`NormalizedKey::from_text`] unless the value came out of `normalize`.
//!
//! - **Cursor**: only meaningful for the term it was issued under. Sessions
//!   own their cursors and drop them on every new term, so a cursor can never
//!   leak into a different query.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::normalize;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Canonical, locale-folded form of a text field used for matching.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Normalize `text` and wrap it.
    pub fn from_text(text: &str) -> Self {
        NormalizedKey(normalize(text))
    }

    /// Wrap a value that is already the output of `normalize`.
    pub(crate) fn from_normalized(value: String) -> Self {
        NormalizedKey(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// ENTITY TYPES
// =============================================================================

/// Which collection an entity lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Post,
    User,
}

impl EntityKind {
    /// Display order of the result sections: posts first, then users.
    pub const ALL: [EntityKind; 2] = [EntityKind::Post, EntityKind::User];

    /// Collection name in the document store.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Post => "blogs",
            EntityKind::User => "users",
        }
    }

    /// Name of the stored field holding the normalized key.
    pub fn key_field(self) -> &'static str {
        match self {
            EntityKind::Post => "title_normalized",
            EntityKind::User => "username_normalized",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Post => f.write_str("post"),
            EntityKind::User => f.write_str("user"),
        }
    }
}

/// A post as returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostHit {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author_id: Option<String>,
    pub title_normalized: NormalizedKey,
}

/// A user as returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHit {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    pub username_normalized: NormalizedKey,
}

impl UserHit {
    /// Display name, falling back to the username, then to the id.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.username.as_deref())
            .unwrap_or(&self.id)
    }

    /// Up to two leading characters of the label, upper-cased, for avatar
    /// placeholders when there is no photo.
    pub fn initials(&self) -> String {
        self.label()
            .chars()
            .filter(|c| !c.is_whitespace())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// A single search result of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchableEntity {
    Post(PostHit),
    User(UserHit),
}

impl SearchableEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            SearchableEntity::Post(_) => EntityKind::Post,
            SearchableEntity::User(_) => EntityKind::User,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SearchableEntity::Post(post) => &post.id,
            SearchableEntity::User(user) => &user.id,
        }
    }

    pub fn key(&self) -> &NormalizedKey {
        match self {
            SearchableEntity::Post(post) => &post.title_normalized,
            SearchableEntity::User(user) => &user.username_normalized,
        }
    }

    /// Text shown as the result's heading.
    pub fn heading(&self) -> &str {
        match self {
            SearchableEntity::Post(post) => &post.title,
            SearchableEntity::User(user) => user.label(),
        }
    }

    /// Link to the entity's detail view.
    pub fn href(&self) -> String {
        match self {
            SearchableEntity::Post(post) => format!("/blog/{}", post.id),
            SearchableEntity::User(user) => format!("/user/{}", user.id),
        }
    }

    /// Position of this entity in its sorted stream.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.key().clone(), self.id().to_string())
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Opaque position in one kind's sorted result stream.
///
/// Streams are ordered by `(key, id)`: the key alone is not unique, two posts
/// can share a title. Resuming strictly after the pair skips exactly what was
/// already delivered.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    key: NormalizedKey,
    id: String,
}

impl Cursor {
    pub(crate) fn new(key: NormalizedKey, id: String) -> Self {
        Cursor { key, id }
    }

    pub fn key(&self) -> &NormalizedKey {
        &self.key
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
