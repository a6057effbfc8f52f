// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search box: keystrokes in, debounced searches out.

use tracing::debug;

use super::{Paginator, SearchSession};
use crate::config::SearchConfig;
use crate::debounce::Debouncer;
use crate::types::EntityKind;

/// Wires a text input to a [`Paginator`] through a [`Debouncer`].
///
/// Typing goes through the debouncer; clearing the box, submitting and
/// "load more" do not.
pub struct SearchInput {
    paginator: Paginator,
    debouncer: Debouncer<String>,
}

impl SearchInput {
    pub fn new(paginator: Paginator, config: &SearchConfig) -> Self {
        let debouncer = paginator.debounced(config.debounce);
        Self {
            paginator,
            debouncer,
        }
    }

    /// React to the box's content changing to `text`.
    ///
    /// A blank box cancels the pending search and clears the session at
    /// once, so a late timer cannot search for text that is gone.
    pub fn on_input(&self, text: &str) {
        if text.trim().is_empty() {
            debug!("input cleared");
            self.debouncer.cancel();
            self.paginator.clear();
        } else {
            self.debouncer.call(text.to_string());
        }
    }

    /// Search for `text` now, dropping any pending debounced search.
    pub async fn submit(&self, text: &str) -> SearchSession {
        self.debouncer.cancel();
        self.paginator.search(text).await
    }

    pub async fn load_more(&self, kind: EntityKind) -> SearchSession {
        self.paginator.load_more(kind).await
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn session(&self) -> SearchSession {
        self.paginator.session()
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }
}
