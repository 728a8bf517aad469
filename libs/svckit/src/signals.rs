//! Process termination signals.

use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Resolves with the name of the first termination signal received
/// (`SIGINT` via Ctrl+C, or `SIGTERM` on unix).
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> std::io::Result<&'static str> {
    let received = tokio::select! {
        res = signal::ctrl_c() => res.map(|()| "SIGINT")?,
        res = sigterm() => res?,
    };
    tracing::info!(signal = received, "shutdown signal received");
    Ok(received)
}

#[cfg(unix)]
async fn sigterm() -> std::io::Result<&'static str> {
    let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    stream.recv().await;
    Ok("SIGTERM")
}

#[cfg(not(unix))]
async fn sigterm() -> std::io::Result<&'static str> {
    std::future::pending().await
}

/// Cancels `token` once a termination signal arrives.
#[must_use = "abort the listener once the server has stopped"]
pub fn cancel_on_shutdown(token: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = wait_for_shutdown().await {
            tracing::error!(error = %e, "signal handling failed, shutting down");
        }
        token.cancel();
    })
}
