// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake delete adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DeleteAdapter, DeleteError, DeleteOutcome};
use async_trait::async_trait;
use deltweet_core::TweetId;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Recorded delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCall {
    pub id: TweetId,
}

#[derive(Default)]
struct FakeDeleteState {
    calls: Vec<DeleteCall>,
    rejected: HashMap<TweetId, (u16, String)>,
    transport_errors: HashSet<TweetId>,
    hanging: HashSet<TweetId>,
}

/// Fake delete adapter for testing.
///
/// Every id is deleted unless scripted otherwise.
#[derive(Clone, Default)]
pub struct FakeDeleteAdapter {
    inner: Arc<Mutex<FakeDeleteState>>,
}

impl FakeDeleteAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `id` with a non-200 status
    pub fn reject(&self, id: &str, status: u16, body: &str) {
        self.inner
            .lock()
            .rejected
            .insert(TweetId::new(id), (status, body.to_string()));
    }

    /// Fail `id` before any response arrives
    pub fn transport_error(&self, id: &str) {
        self.inner.lock().transport_errors.insert(TweetId::new(id));
    }

    /// Never answer `id`
    pub fn hang(&self, id: &str) {
        self.inner.lock().hanging.insert(TweetId::new(id));
    }

    /// Get all recorded requests
    pub fn calls(&self) -> Vec<DeleteCall> {
        self.inner.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().calls.len()
    }
}

#[async_trait]
impl DeleteAdapter for FakeDeleteAdapter {
    async fn delete(&self, id: &TweetId) -> Result<DeleteOutcome, DeleteError> {
        let (hang, result) = {
            let mut inner = self.inner.lock();
            inner.calls.push(DeleteCall { id: id.clone() });
            let result = if inner.transport_errors.contains(id) {
                Err(DeleteError::Transport(format!("connection reset ({id})")))
            } else if let Some((status, body)) = inner.rejected.get(id) {
                Ok(DeleteOutcome::Rejected {
                    status: *status,
                    body: body.clone(),
                })
            } else {
                Ok(DeleteOutcome::Deleted)
            };
            (inner.hanging.contains(id), result)
        };

        if hang {
            std::future::pending::<()>().await;
        }
        result
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
