// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable file writes for the cache.
//!
//! Every save goes through the same sequence so a crash mid-save leaves
//! either the previous cache or the new one on disk, never a torn file:
//!
//! ```text
//! write cache.tmp → fsync cache.tmp → rename → cache.json → fsync dir
//! ```
//!
//! The `CacheWriter` trait abstracts those steps so the runner's checkpoint
//! cadence can be tested without touching the filesystem.

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Trait abstracting cache I/O for testability.
pub trait CacheWriter: Send + Sync + 'static {
    /// Write serialized cache data to a temporary file.
    fn write_tmp(&self, path: &Path, data: &[u8]) -> std::io::Result<()>;

    /// Fsync a file to ensure data is durable.
    fn fsync_file(&self, path: &Path) -> std::io::Result<()>;

    /// Atomically rename tmp file to final path.
    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()>;

    /// Fsync directory to make rename durable.
    fn fsync_dir(&self, path: &Path) -> std::io::Result<()>;
}

/// Production writer using real filesystem operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCacheWriter;

impl CacheWriter for FsCacheWriter {
    fn write_tmp(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        file.write_all(data)?;
        Ok(())
    }

    fn fsync_file(&self, path: &Path) -> std::io::Result<()> {
        File::open(path)?.sync_all()
    }

    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        std::fs::rename(from, to)
    }

    fn fsync_dir(&self, path: &Path) -> std::io::Result<()> {
        // Directories cannot be opened for sync on Windows
        if cfg!(windows) {
            return Ok(());
        }
        File::open(path)?.sync_all()
    }
}
