//! HTTP shell around the resolver.
//!
//! Provides two endpoints:
//! - `POST /process-redirect` - resolves `{"preRedirectUrl": ...}`
//! - `GET /status` - JSON counters and uptime
//!
//! Shutdown is driven by the `CancellationToken` in `AppState`: the listener
//! stops accepting connections and in-flight resolutions are abandoned, which
//! tears down any browser they had open.

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::config::{PROCESS_REDIRECT_PATH, STATUS_PATH};
use crate::probe::Transport;
use crate::render::Renderer;
use handlers::{process_redirect_handler, status_handler};
pub use types::{
    AppState, MessageResponse, ProcessRedirectRequest, ProcessRedirectResponse, ResolvedCounts,
    StatusResponse, TransportErrorCounts,
};

/// Builds the router. Other methods on these paths answer 405.
pub fn build_router<T, R>(state: AppState<T, R>) -> Router
where
    T: Transport + 'static,
    R: Renderer + 'static,
{
    Router::new()
        .route(PROCESS_REDIRECT_PATH, post(process_redirect_handler::<T, R>))
        .route(STATUS_PATH, get(status_handler::<T, R>))
        .with_state(state)
}

/// Binds `bind:port` and serves until the shutdown token is cancelled.
pub async fn start_server<T, R>(
    bind: &str,
    port: u16,
    state: AppState<T, R>,
) -> Result<(), anyhow::Error>
where
    T: Transport + 'static,
    R: Renderer + 'static,
{
    let listener = TcpListener::bind(format!("{}:{}", bind, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}:{}: {}", bind, port, e))?;

    log::info!("Server listening on http://{}:{}/", bind, port);
    log::info!("  - Resolve: POST http://{}:{}{}", bind, port, PROCESS_REDIRECT_PATH);
    log::info!("  - Status: GET http://{}:{}{}", bind, port, STATUS_PATH);

    serve(listener, state).await
}

/// Serves on an already bound listener until the shutdown token is cancelled.
pub async fn serve<T, R>(listener: TcpListener, state: AppState<T, R>) -> Result<(), anyhow::Error>
where
    T: Transport + 'static,
    R: Renderer + 'static,
{
    let shutdown = state.shutdown.clone();
    let app = build_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server terminated");
    Ok(())
}
