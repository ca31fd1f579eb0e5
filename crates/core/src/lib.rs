// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! deltweet-core: domain types shared by the deltweet crates

pub mod archive;
pub mod credentials;
pub mod id;
pub mod status;

pub use archive::{Archive, ArchiveError};
pub use credentials::{ConfigError, Credentials, REQUIRED_HEADERS};
pub use id::TweetId;
pub use status::TweetStatus;
