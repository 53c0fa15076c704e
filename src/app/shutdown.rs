//! Graceful shutdown handling.

use log::{info, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Waits for ctrl-c (or SIGTERM on unix) and cancels `cancel`.
///
/// Returns early, without cancelling anything new, if the token is cancelled
/// from elsewhere first.
pub async fn shutdown_on_signal(cancel: CancellationToken) {
    tokio::select! {
        _ = cancel.cancelled() => return,
        _ = termination_signal() => {}
    }
    info!("Shutdown signal received, stopping");
    cancel.cancel();
}

/// Waits for the task running [`shutdown_on_signal`] to finish.
///
/// A panicked or aborted listener is logged; returns `false` in that case.
pub async fn join_signal_listener(listener: JoinHandle<()>) -> bool {
    match listener.await {
        Ok(()) => true,
        Err(e) => {
            warn!("Shutdown signal listener did not exit cleanly: {}", e);
            false
        }
    }
}

async fn termination_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
