// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! deltweet execution engine: reconcile, then drain the pending posts

pub mod env;
mod error;
mod runner;
mod setup;

pub use error::RunError;
pub use runner::{RunOutcome, RunReport, Runner, RunnerConfig};
pub use setup::prepare_cache;
