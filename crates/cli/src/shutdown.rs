// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signal handling: SIGINT or SIGTERM flips the shutdown channel once.

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::watch;
use tracing::info;

/// Register the handlers and return the receiver the runner watches.
///
/// Registration happens before the task is spawned so a signal delivered
/// right after this returns is not lost.
pub(crate) fn listen() -> std::io::Result<watch::Receiver<bool>> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let (tx, rx) = watch::channel(false);

    tokio::spawn(async move {
        tokio::select! {
            _ = sigint.recv() => info!("received SIGINT"),
            _ = sigterm.recv() => info!("received SIGTERM"),
        }
        let _ = tx.send(true);
        // Keep the sender alive until the runner is done with it
        tx.closed().await;
    });

    Ok(rx)
}
