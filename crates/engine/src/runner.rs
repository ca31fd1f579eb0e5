// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The delete loop.
//!
//! One pass over the cache in iteration order, one request at a time.
//! Progress is saved every `checkpoint_every` attempts and once more when
//! the pass ends, so an interrupt or crash loses at most one checkpoint
//! window of confirmed deletes. Those posts stay `Pending` and their next
//! delete simply fails, leaving them `Pending` again.

use crate::RunError;
use deltweet_adapters::{DeleteAdapter, DeleteOutcome};
use deltweet_storage::{CacheFile, CacheStats, CacheWriter, FsCacheWriter, StatusCache};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Runner cadence settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Save the cache after this many attempts
    pub checkpoint_every: u64,
    /// Log totals after this many attempts
    pub stats_every: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(crate::env::checkpoint_every(), crate::env::stats_every())
    }
}

impl RunnerConfig {
    /// Intervals below 1 are raised to 1.
    pub fn new(checkpoint_every: u64, stats_every: u64) -> Self {
        Self {
            checkpoint_every: checkpoint_every.max(1),
            stats_every: stats_every.max(1),
        }
    }
}

/// How the pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every pending post was attempted
    Completed,
    /// Shutdown was requested before the pass finished
    Interrupted,
}

/// Summary of one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Delete requests that got an answer (deleted or rejected)
    pub attempted: u64,
    pub deleted: u64,
    pub rejected: u64,
    pub outcome: RunOutcome,
    /// Cache totals after the final save
    pub stats: CacheStats,
}

/// Drives a [`StatusCache`] to completion through a [`DeleteAdapter`].
pub struct Runner<A: DeleteAdapter, W: CacheWriter = FsCacheWriter> {
    adapter: A,
    file: CacheFile<W>,
    config: RunnerConfig,
}

impl<A: DeleteAdapter, W: CacheWriter> Runner<A, W> {
    pub fn new(adapter: A, file: CacheFile<W>, config: RunnerConfig) -> Self {
        Self {
            adapter,
            file,
            config,
        }
    }

    pub fn config(&self) -> RunnerConfig {
        self.config
    }

    /// Attempt every pending post once.
    ///
    /// `shutdown` flipping to `true` abandons the in-flight request (its post
    /// stays pending), saves, and returns [`RunOutcome::Interrupted`]. A
    /// transport failure saves and returns the error.
    pub async fn run(
        &self,
        cache: &mut StatusCache,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<RunReport, RunError> {
        let mut attempted = 0u64;
        let mut deleted = 0u64;
        let mut rejected = 0u64;
        let mut outcome = RunOutcome::Completed;

        for id in cache.pending() {
            if *shutdown.borrow() {
                outcome = RunOutcome::Interrupted;
                break;
            }

            let result = tokio::select! {
                biased;
                _ = shutdown_requested(&mut shutdown) => {
                    outcome = RunOutcome::Interrupted;
                    break;
                }
                result = self.adapter.delete(&id) => result,
            };

            match result {
                Ok(DeleteOutcome::Deleted) => {
                    cache.mark_deleted(id.as_str());
                    deleted += 1;
                }
                Ok(DeleteOutcome::Rejected { status, body }) => {
                    warn!(tweet_id = %id, status, "Could not delete {id}: {body}");
                    rejected += 1;
                }
                Err(source) => {
                    self.file.save(cache)?;
                    return Err(RunError::Delete { id, source });
                }
            }
            attempted += 1;

            if attempted % self.config.checkpoint_every == 0 {
                debug!(attempted, "checkpoint");
                self.file.save(cache)?;
            }
            if attempted % self.config.stats_every == 0 {
                log_stats(cache.stats());
            }
        }

        if outcome == RunOutcome::Interrupted {
            info!("Interrupted. Saving cache and exiting...");
        }
        self.file.save(cache)?;

        let stats = cache.stats();
        Ok(RunReport {
            attempted,
            deleted,
            rejected,
            outcome,
            stats,
        })
    }
}

fn log_stats(stats: CacheStats) {
    info!(
        "Total {} tweets, {} deleted, {} to go",
        stats.total, stats.deleted, stats.pending
    );
}

/// Resolves once shutdown is requested; never resolves if the sender is gone.
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    if shutdown.wait_for(|stop| *stop).await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
