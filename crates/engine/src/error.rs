// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the delete runner

use deltweet_adapters::DeleteError;
use deltweet_core::TweetId;
use deltweet_storage::CacheError;
use thiserror::Error;

/// Errors that abort a run. Rejected deletes are not errors.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
    #[error("delete of {id} failed: {source}")]
    Delete {
        id: TweetId,
        #[source]
        source: DeleteError,
    },
}
