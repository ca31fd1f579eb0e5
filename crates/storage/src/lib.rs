// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Persistent per-post status cache for deltweet

mod cache;
mod file;
mod writer;

pub use cache::{CacheStats, ReconcileSummary, StatusCache};
pub use file::{CacheError, CacheFile, DEFAULT_CACHE_FILE};
pub use writer::{CacheWriter, FsCacheWriter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeCacheWriter, IoLog};
