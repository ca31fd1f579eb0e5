// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bring a loaded cache in line with the current archive.

use deltweet_core::Archive;
use deltweet_storage::{CacheStats, StatusCache};

/// Reconcile `cache` against `archive` and report where the run starts from.
pub fn prepare_cache(cache: &mut StatusCache, archive: &Archive) -> CacheStats {
    let summary = cache.reconcile(archive.ids());
    let stats = cache.stats();
    tracing::info!(
        removed = summary.removed,
        added = summary.added,
        "Setup {} tweets with {} already deleted",
        stats.total,
        stats.deleted,
    );
    stats
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod tests;
