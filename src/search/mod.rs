// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search sessions: where the rubber meets the road.
//!
//! The query planner says what to scan; this module decides when, keeps the
//! per-kind cursors, and makes sure only the latest term's results are ever
//! visible.

mod collect;
mod input;
mod paginator;
mod session;

pub use collect::collect_all;
pub use input::SearchInput;
pub use paginator::Paginator;
pub use session::{SearchSession, StreamStatus, ViewState};
