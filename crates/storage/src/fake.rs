// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory cache writer for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::CacheWriter;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Records all I/O operations for verification.
#[derive(Debug, Clone, Default)]
pub struct IoLog {
    pub writes: Vec<(PathBuf, usize)>,
    pub fsyncs_file: Vec<PathBuf>,
    pub renames: Vec<(PathBuf, PathBuf)>,
    pub fsyncs_dir: Vec<PathBuf>,
    /// Contents of every completed save, oldest first
    pub saved: Vec<Vec<u8>>,
}

/// Fake writer that keeps file contents in memory and supports error injection.
#[derive(Clone, Default)]
pub struct FakeCacheWriter {
    log: Arc<Mutex<IoLog>>,
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    fail_write: Arc<AtomicBool>,
    fail_rename: Arc<AtomicBool>,
}

impl FakeCacheWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_write(&self, fail: bool) {
        self.fail_write.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_rename(&self, fail: bool) {
        self.fail_rename.store(fail, Ordering::SeqCst);
    }

    pub fn log(&self) -> IoLog {
        self.log.lock().clone()
    }

    /// Number of completed saves (tmp renamed into place)
    pub fn save_count(&self) -> usize {
        self.log.lock().renames.len()
    }

    /// Every completed save parsed as JSON, oldest first
    pub fn saved_json(&self) -> Vec<serde_json::Value> {
        self.log
            .lock()
            .saved
            .iter()
            .filter_map(|bytes| serde_json::from_slice(bytes).ok())
            .collect()
    }

    /// Contents last renamed into `path`
    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().get(path).cloned()
    }

    /// Contents of `path` parsed as JSON
    pub fn json(&self, path: &Path) -> Option<serde_json::Value> {
        self.contents(path)
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
    }
}

fn injected(what: &str) -> std::io::Error {
    std::io::Error::other(format!("injected {what} failure"))
}

impl CacheWriter for FakeCacheWriter {
    fn write_tmp(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        if self.fail_write.load(Ordering::SeqCst) {
            return Err(injected("write"));
        }
        self.log.lock().writes.push((path.to_owned(), data.len()));
        self.files.lock().insert(path.to_owned(), data.to_vec());
        Ok(())
    }

    fn fsync_file(&self, path: &Path) -> std::io::Result<()> {
        self.log.lock().fsyncs_file.push(path.to_owned());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        if self.fail_rename.load(Ordering::SeqCst) {
            return Err(injected("rename"));
        }
        let mut files = self.files.lock();
        let mut log = self.log.lock();
        if let Some(data) = files.remove(from) {
            log.saved.push(data.clone());
            files.insert(to.to_owned(), data);
        }
        log.renames.push((from.to_owned(), to.to_owned()));
        Ok(())
    }

    fn fsync_dir(&self, path: &Path) -> std::io::Result<()> {
        self.log.lock().fsyncs_dir.push(path.to_owned());
        Ok(())
    }
}
