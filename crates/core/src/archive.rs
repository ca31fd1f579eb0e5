// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reader for the `tweets.js` file from a downloaded account archive.
//!
//! The file is JavaScript, not JSON: a variable assignment such as
//! `window.YTD.tweets.part0 = [ ... ]`. Everything from the first `[` to
//! the end of the file is a JSON array of `{"tweet": {"id_str": ...}}`.

use crate::TweetId;
use indexmap::IndexSet;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading an archive file
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no JSON array found in archive")]
    NoArray,
    #[error("invalid archive JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Entry {
    tweet: TweetBody,
}

#[derive(Deserialize)]
struct TweetBody {
    id_str: String,
}

/// The set of post ids listed in an archive.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    /// Number of entries in the file, duplicates included
    pub entries: usize,
    ids: IndexSet<TweetId>,
}

impl Archive {
    pub fn load(path: &Path) -> Result<Self, ArchiveError> {
        let text = std::fs::read_to_string(path).map_err(|source| ArchiveError::Io {
            path: path.to_owned(),
            source,
        })?;
        let archive = Self::parse(&text)?;
        tracing::info!(path = %path.display(), "Loaded {} tweets", archive.entries);
        Ok(archive)
    }

    pub fn parse(text: &str) -> Result<Self, ArchiveError> {
        let start = text.find('[').ok_or(ArchiveError::NoArray)?;
        let entries: Vec<Entry> = serde_json::from_str(&text[start..])?;

        let count = entries.len();
        let ids = entries
            .into_iter()
            .map(|e| TweetId::new(e.tweet.id_str))
            .collect();
        Ok(Self {
            entries: count,
            ids,
        })
    }

    /// Distinct ids, in first-seen order.
    pub fn ids(&self) -> &IndexSet<TweetId> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
