// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-post deletion status.

use std::fmt;

/// Where a post stands in the deletion run.
///
/// The only legal transition is `Pending` to `Deleted`, and only after the
/// remote service confirmed the delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TweetStatus {
    /// Still present remotely (or not yet confirmed deleted)
    #[default]
    Pending,
    /// Remote delete confirmed
    Deleted,
}

impl TweetStatus {
    /// On-disk code. `1` and `2` are what existing cache files contain.
    pub const fn code(self) -> u8 {
        match self {
            TweetStatus::Pending => 1,
            TweetStatus::Deleted => 2,
        }
    }

    pub const fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(TweetStatus::Pending),
            2 => Some(TweetStatus::Deleted),
            _ => None,
        }
    }

    pub fn is_deleted(self) -> bool {
        self == TweetStatus::Deleted
    }
}

impl fmt::Display for TweetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TweetStatus::Pending => write!(f, "pending"),
            TweetStatus::Deleted => write!(f, "deleted"),
        }
    }
}

impl serde::Serialize for TweetStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> serde::Deserialize<'de> for TweetStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u64::deserialize(deserializer)?;
        TweetStatus::from_code(code).ok_or_else(|| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Unsigned(code),
                &"status code 1 (pending) or 2 (deleted)",
            )
        })
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
