// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Log output for the `sift` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job. Logs go to stderr so search output on stdout stays pipeable.

use std::io::stderr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `info`, or `debug` for
/// this crate when `verbose` is on.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let fallback = if verbose { "info,sift=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(stderr)
        .with_target(false)
        .without_time()
        .with_filter(filter);

    tracing_subscriber::registry().with(layer).try_init()?;
    Ok(())
}
