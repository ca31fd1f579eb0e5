// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session credentials copied out of a logged-in browser session.
//!
//! The file holds one `name: value` header per line, exactly as the browser
//! dev tools show them for an API request. Names are case-insensitive and
//! stored lower-cased; values keep their inner whitespace.

use indexmap::IndexMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Headers every delete request needs; a file missing any of them is rejected.
pub const REQUIRED_HEADERS: [&str; 3] = ["x-csrf-token", "authorization", "cookie"];

/// Errors from loading the credentials file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {field} field in {}", .path.display())]
    MissingField { field: &'static str, path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lower-cased header name to value
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    headers: IndexMap<String, String>,
}

impl Credentials {
    /// Read and validate a credentials file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse credentials text. `path` is only used in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut headers = IndexMap::new();
        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((name, value)) = line.split_once(':') else {
                tracing::debug!(line = lineno + 1, path = %path.display(), "skipping line without ':'");
                continue;
            };
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }

        for field in REQUIRED_HEADERS {
            let present = headers.get(field).is_some_and(|v: &String| !v.is_empty());
            if !present {
                tracing::error!(field, path = %path.display(), "missing required credential");
                return Err(ConfigError::MissingField {
                    field,
                    path: path.to_owned(),
                });
            }
        }

        Ok(Self { headers })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// All headers in file order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

// Values are session secrets; only names are printed.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.headers.keys().map(|k| (k, "<redacted>")))
            .finish()
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
