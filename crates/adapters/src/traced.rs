// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::delete::{DeleteAdapter, DeleteError, DeleteOutcome};
use async_trait::async_trait;
use deltweet_core::TweetId;
use tracing::Instrument;

/// Wrapper that adds tracing to any DeleteAdapter
#[derive(Clone)]
pub struct TracedDelete<A> {
    inner: A,
}

impl<A> TracedDelete<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

#[async_trait]
impl<A: DeleteAdapter> DeleteAdapter for TracedDelete<A> {
    async fn delete(&self, id: &TweetId) -> Result<DeleteOutcome, DeleteError> {
        async {
            tracing::debug!("sending delete request");
            let start = std::time::Instant::now();
            let result = self.inner.delete(id).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(DeleteOutcome::Deleted) => tracing::debug!(elapsed_ms, "deleted"),
                Ok(DeleteOutcome::Rejected { status, .. }) => {
                    tracing::debug!(status, elapsed_ms, "rejected")
                }
                Err(e) => tracing::error!(elapsed_ms, error = %e, "delete request failed"),
            }
            result
        }
        .instrument(tracing::info_span!("tweet.delete", tweet_id = %id))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
