// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

/// Origin the GraphQL API is served from (default: `https://twitter.com`).
pub fn api_base() -> String {
    std::env::var("DELTWEET_API_BASE")
        .ok()
        .map(|s| s.trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "https://twitter.com".to_string())
}
