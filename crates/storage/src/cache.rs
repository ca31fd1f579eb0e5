// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory status map and its reconciliation against an archive.

use deltweet_core::{TweetId, TweetStatus};
use indexmap::{IndexMap, IndexSet};

/// Totals over the cache. `total == deleted + pending` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub total: usize,
    pub deleted: usize,
    pub pending: usize,
}

/// What a reconcile pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Cached ids no longer in the archive
    pub removed: usize,
    /// Archive ids seen for the first time
    pub added: usize,
}

/// Status of every post in the current archive, keyed by id.
///
/// Iteration order is the processing order: entries loaded from disk keep
/// their file order, ids first seen during reconcile are appended in archive
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCache {
    entries: IndexMap<TweetId, TweetStatus>,
}

impl StatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: IndexMap<TweetId, TweetStatus>) -> Self {
        Self { entries }
    }

    pub(crate) fn entries(&self) -> &IndexMap<TweetId, TweetStatus> {
        &self.entries
    }

    /// Make the key set equal to `ids`.
    ///
    /// Obsolete ids are dropped, new ids start as `Pending`, and ids already
    /// present keep their status. Running it twice with the same set changes
    /// nothing the second time.
    pub fn reconcile(&mut self, ids: &IndexSet<TweetId>) -> ReconcileSummary {
        let before = self.entries.len();
        // retain preserves the relative order of survivors
        self.entries.retain(|id, _| ids.contains(id));
        let removed = before - self.entries.len();

        let mut added = 0;
        for id in ids {
            if !self.entries.contains_key(id) {
                self.entries.insert(id.clone(), TweetStatus::Pending);
                added += 1;
            }
        }

        tracing::debug!(
            removed,
            added,
            "{removed} Tweet IDs in cache but not in loaded archive. Deleting from cache."
        );
        ReconcileSummary { removed, added }
    }

    /// Record a confirmed delete. Returns `false` for ids not in the cache.
    ///
    /// There is no way back to `Pending`.
    pub fn mark_deleted(&mut self, id: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(status) => {
                *status = TweetStatus::Deleted;
                true
            }
            None => false,
        }
    }

    pub fn status(&self, id: &str) -> Option<TweetStatus> {
        self.entries.get(id).copied()
    }

    /// Ids still pending, in processing order.
    pub fn pending(&self) -> Vec<TweetId> {
        self.entries
            .iter()
            .filter(|(_, status)| !status.is_deleted())
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TweetId, TweetStatus)> {
        self.entries.iter().map(|(id, status)| (id, *status))
    }

    pub fn stats(&self) -> CacheStats {
        let total = self.entries.len();
        let deleted = self.entries.values().filter(|s| s.is_deleted()).count();
        CacheStats {
            total,
            deleted,
            pending: total - deleted,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
