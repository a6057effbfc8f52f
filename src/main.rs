// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use sift::{
    collect_all, normalize, run_index, verify_dataset, Dataset, Paginator, SearchConfig,
    ViewState,
};

mod cli;
use cli::display::{self, themed, timing_ms, GRAY};
use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    sift::logging::init(cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Index { input, output } => {
            let stats = run_index(&input, &output)
                .with_context(|| format!("failed to index {}", input.display()))?;
            println!(
                "Indexed {} posts and {} users ({} keys rewritten) → {}",
                stats.posts,
                stats.users,
                stats.rewritten,
                output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Verify { dataset } => {
            let dataset = Dataset::load(&dataset)?;
            let report = verify_dataset(&dataset);
            display::print_report(&report);
            if report.is_clean() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Search {
            dataset,
            query,
            page_size,
            pages,
            all,
        } => {
            let config = match page_size {
                Some(page_size) => config.with_page_size(page_size),
                None => config,
            };
            run_search(&dataset, &query, &config, pages, all).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Normalize { text } => {
            println!("{}", normalize(&text));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SearchConfig::from_json(&content)
        .with_context(|| format!("invalid config {}", path.display()))
}

async fn run_search(
    dataset: &Path,
    term: &str,
    config: &SearchConfig,
    pages: usize,
    all: bool,
) -> anyhow::Result<()> {
    let dataset = Dataset::load(dataset)?;
    let store = Arc::new(dataset.to_store());
    info!(records = dataset.len(), "dataset loaded");
    let started = Instant::now();

    if all {
        let entities = collect_all(store.as_ref(), term, config.page_size).await?;
        let elapsed = started.elapsed().as_secs_f64() * 1000.0;
        display::print_collected(term, &entities);
        println!("{} {}", themed(GRAY, &[], "took"), timing_ms(elapsed));
        return Ok(());
    }

    let paginator = Paginator::new(store, config);
    let mut session = paginator.search(term).await;
    for _ in 1..pages {
        if !session.has_more() {
            break;
        }
        session = paginator.load_more_all().await;
    }
    let elapsed = started.elapsed().as_secs_f64() * 1000.0;

    if let ViewState::Failed(error) = session.view_state() {
        return Err(error.into());
    }
    display::print_session(&session);
    println!("{} {}", themed(GRAY, &[], "took"), timing_ms(elapsed));
    Ok(())
}
