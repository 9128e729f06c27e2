//! Graceful shutdown

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// In-flight requests get this long to finish once a signal arrives.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install {signal} handler: {source}")]
    Install {
        signal: &'static str,

        #[source]
        source: io::Error,
    },
}

async fn interrupt() -> Result<&'static str, ShutdownSignalError> {
    signal::ctrl_c()
        .await
        .map_err(|source| ShutdownSignalError::Install {
            signal: "ctrl_c",
            source,
        })?;

    Ok("ctrl_c")
}

#[cfg(unix)]
async fn terminate() -> Result<&'static str, ShutdownSignalError> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(
        |source| ShutdownSignalError::Install {
            signal: "SIGTERM",
            source,
        },
    )?;

    sigterm.recv().await;

    Ok("SIGTERM")
}

#[cfg(not(unix))]
async fn terminate() -> Result<&'static str, ShutdownSignalError> {
    std::future::pending().await
}

/// Wait for Ctrl+C or SIGTERM, then drain the server.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let received = tokio::select! {
        result = interrupt() => result?,
        result = terminate() => result?,
    };

    info!(signal = received, "shutting down");

    handle.stop_graceful(DRAIN_TIMEOUT);

    Ok(())
}
