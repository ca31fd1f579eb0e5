// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote delete adapters

mod graphql;

pub use graphql::{GraphqlConfig, GraphqlDeleteAdapter, DELETE_QUERY_ID};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DeleteCall, FakeDeleteAdapter};

use async_trait::async_trait;
use deltweet_core::TweetId;
use thiserror::Error;

/// Errors that stop a delete from reaching the service at all
#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
    #[error("transport error: {0}")]
    Transport(String),
}

/// What the service answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// HTTP 200
    Deleted,
    /// Any other status; the post is left for the next run
    Rejected { status: u16, body: String },
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// Adapter for deleting a single post on the remote service
#[async_trait]
pub trait DeleteAdapter: Clone + Send + Sync + 'static {
    /// Issue one delete request. No retry.
    async fn delete(&self, id: &TweetId) -> Result<DeleteOutcome, DeleteError>;
}
