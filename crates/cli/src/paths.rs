// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use deltweet_storage::DEFAULT_CACHE_FILE;
use std::path::{Path, PathBuf};

/// `cache.json` beside the running executable, or in the working
/// directory when the executable path cannot be resolved.
pub(crate) fn default_cache_path() -> PathBuf {
    let exe = std::env::current_exe().ok();
    cache_path_beside(exe.as_deref())
}

pub(crate) fn cache_path_beside(exe: Option<&Path>) -> PathBuf {
    match exe.and_then(Path::parent) {
        Some(dir) => dir.join(DEFAULT_CACHE_FILE),
        None => PathBuf::from(DEFAULT_CACHE_FILE),
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
