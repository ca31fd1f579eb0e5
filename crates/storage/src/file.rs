// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The on-disk cache file.
//!
//! Format: one JSON object mapping post id to status code, e.g.
//! `{"1598312345678901234": 2, "1598312345678901235": 1}`.

use crate::writer::{CacheWriter, FsCacheWriter};
use crate::StatusCache;
use deltweet_core::{TweetId, TweetStatus};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// File name used when no cache path is given
pub const DEFAULT_CACHE_FILE: &str = "cache.json";

/// Errors from cache file operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Location of the cache plus the writer used to persist it.
pub struct CacheFile<W: CacheWriter = FsCacheWriter> {
    path: PathBuf,
    writer: W,
}

impl CacheFile<FsCacheWriter> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_writer(FsCacheWriter, path)
    }
}

impl<W: CacheWriter> CacheFile<W> {
    /// Create a cache file with a custom writer (for testing).
    pub fn with_writer(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cache.
    ///
    /// A missing file yields an empty cache. A file that does not parse is
    /// moved aside to `<name>.<uuid>` and an empty cache is returned, so a
    /// damaged cache never blocks a run; at worst already-deleted posts get
    /// a second (failing) delete request.
    pub fn load(&self) -> Result<StatusCache, CacheError> {
        let path = &self.path;
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Cache does not exist");
                return Ok(StatusCache::new());
            }
            Err(source) => {
                return Err(CacheError::Io {
                    path: path.clone(),
                    source,
                })
            }
        };

        debug!(path = %path.display(), "Loading cache");
        match serde_json::from_slice::<IndexMap<TweetId, TweetStatus>>(&bytes) {
            Ok(entries) => Ok(StatusCache::from_entries(entries)),
            Err(e) => {
                let bak_path = backup_path(path);
                warn!(
                    error = %e,
                    path = %path.display(),
                    bak = %bak_path.display(),
                    "Cache is invalid, moving file to {}",
                    bak_path.display(),
                );
                std::fs::rename(path, &bak_path).map_err(|source| CacheError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(StatusCache::new())
            }
        }
    }

    /// Replace the file with the full contents of `cache`.
    pub fn save(&self, cache: &StatusCache) -> Result<(), CacheError> {
        debug!(path = %self.path.display(), entries = cache.len(), "Saving state to cache file");
        let data = serde_json::to_vec(cache.entries())?;
        let tmp_path = self.path.with_extension("tmp");
        let io_err = |source| CacheError::Io {
            path: self.path.clone(),
            source,
        };

        self.writer.write_tmp(&tmp_path, &data).map_err(io_err)?;
        self.writer.fsync_file(&tmp_path).map_err(io_err)?;
        self.writer.rename(&tmp_path, &self.path).map_err(io_err)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        self.writer.fsync_dir(dir).map_err(io_err)?;
        Ok(())
    }
}

/// Sibling path with a random suffix: `cache.json` → `cache.json.<uuid>`.
fn backup_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_CACHE_FILE.to_string());
    path.with_file_name(format!("{name}.{}", uuid::Uuid::new_v4()))
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
