// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

/// Parse a positive count; zero and garbage fall back to the default.
fn parse_count(value: Option<String>) -> Option<u64> {
    value
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
}

/// Attempts between cache saves (default: 100).
pub fn checkpoint_every() -> u64 {
    parse_count(std::env::var("DELTWEET_CHECKPOINT_EVERY").ok()).unwrap_or(100)
}

/// Attempts between progress summaries (default: 1000).
pub fn stats_every() -> u64 {
    parse_count(std::env::var("DELTWEET_STATS_EVERY").ok()).unwrap_or(1000)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
