// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search tuning knobs.
//!
//! One page size for every call site, one quiet interval for typing. Values
//! come from defaults, then an optional JSON file, then CLI flags.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Results requested per kind per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Quiet interval before a typed term is searched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub page_size: usize,
    #[serde(rename = "debounceMs", with = "millis")]
    pub debounce: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl SearchConfig {
    /// Parse a JSON config; missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Clamp values into their usable range.
    pub fn validated(self) -> Self {
        Self {
            page_size: self.page_size.max(1),
            ..self
        }
    }

    pub fn with_page_size(self, page_size: usize) -> Self {
        Self { page_size, ..self }.validated()
    }

    pub fn with_debounce(self, debounce: Duration) -> Self {
        Self { debounce, ..self }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
