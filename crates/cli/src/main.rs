// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! deltweet - delete every post listed in an account archive

mod logging;
mod paths;
mod shutdown;

use anyhow::Result;
use clap::Parser;
use deltweet_adapters::{GraphqlConfig, GraphqlDeleteAdapter, TracedDelete};
use deltweet_core::{Archive, Credentials};
use deltweet_engine::{prepare_cache, RunOutcome, RunReport, Runner, RunnerConfig};
use deltweet_storage::CacheFile;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "deltweet", version, about = "Delete all Tweets on TwiXXer")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Path to tweets.js file from Twitter Archive
    #[arg(short = 't', long = "tweetsjs", value_name = "tweets.js")]
    tweets_js: PathBuf,

    /// Path to authentication headers from Twitter (Inspect requests to API)
    #[arg(short = 'a', long = "authdata", value_name = "authdata.txt")]
    auth_data: PathBuf,

    /// Progress cache [default: cache.json next to the executable]
    #[arg(short = 'c', long = "cache", value_name = "cache.json")]
    cache: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", format_error(&e));
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped (common when thiserror variants use
/// `#[error("... {0}")]` with `#[from]`).
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run(cli: Cli) -> Result<()> {
    debug!("Starting");

    // Credentials before anything else: a bad auth file must never reach the network
    let credentials = Credentials::load(&cli.auth_data)?;
    debug!(?credentials, "loaded credentials");
    let adapter = TracedDelete::new(GraphqlDeleteAdapter::new(
        &credentials,
        GraphqlConfig::default(),
    )?);

    let cache_path = cli.cache.unwrap_or_else(paths::default_cache_path);
    let file = CacheFile::new(cache_path);
    let mut cache = file.load()?;

    let archive = Archive::load(&cli.tweets_js)?;
    prepare_cache(&mut cache, &archive);

    let shutdown = shutdown::listen()?;
    let runner = Runner::new(adapter, file, RunnerConfig::default());
    let report = runner.run(&mut cache, shutdown).await?;
    info!("{}", summary(&report));
    Ok(())
}

fn summary(report: &RunReport) -> String {
    let stats = report.stats;
    let head = match report.outcome {
        RunOutcome::Completed => "Finished",
        RunOutcome::Interrupted => "Stopped early",
    };
    format!(
        "{head}: {} attempted, {} rejected. Total {} tweets, {} deleted, {} to go",
        report.attempted, report.rejected, stats.total, stats.deleted, stats.pending
    )
}

#[cfg(test)]
fn cli_command() -> clap::Command {
    use clap::CommandFactory;
    Cli::command()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
