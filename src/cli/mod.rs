// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sift command-line interface.
//!
//! Four subcommands: `index` to rekey a dataset export, `verify` to find
//! stale keys, `search` to page through a dataset the way the search page
//! does, and `normalize` to show what a string folds to.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sift",
    about = "Prefix search over posts and users with cursor pagination",
    version
)]
pub struct Cli {
    /// Log debug events from the search pipeline
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file with `pageSize` and `debounceMs`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recompute every stored search key in a dataset
    Index {
        /// Dataset JSON with `posts` and `users`
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the rekeyed dataset
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Report records whose stored key disagrees with the normalizer
    ///
    /// Exits non-zero when any record drifted.
    Verify {
        /// Dataset JSON
        dataset: PathBuf,
    },

    /// Search a dataset and display results by section
    Search {
        /// Dataset JSON
        dataset: PathBuf,

        /// Search term (prefix)
        query: String,

        /// Results per kind per page (overrides the config file)
        #[arg(short, long)]
        page_size: Option<usize>,

        /// Number of pages to fetch per kind
        #[arg(long, default_value = "1", conflicts_with = "all")]
        pages: usize,

        /// Fetch every match
        #[arg(long)]
        all: bool,
    },

    /// Print the normalized form of a string
    Normalize {
        /// Text to normalize
        text: String,
    },
}
