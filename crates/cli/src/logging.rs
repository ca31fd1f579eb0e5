// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive when `RUST_LOG` is unset.
pub(crate) fn default_directive(debug: bool) -> &'static str {
    if debug {
        "info,deltweet=debug,deltweet_core=debug,deltweet_storage=debug,deltweet_adapters=debug,deltweet_engine=debug"
    } else {
        "info"
    }
}

/// Install the global subscriber. Logs go to stderr.
pub(crate) fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}
