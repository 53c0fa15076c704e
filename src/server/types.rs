//! HTTP shell data structures.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error_handling::ProcessingStats;
use crate::notify::Notifier;
use crate::probe::Transport;
use crate::render::Renderer;
use crate::resolve::{ResolutionMethod, Resolver};

/// Shared state for the HTTP shell
pub struct AppState<T, R> {
    pub resolver: Arc<Resolver<T, R>>,
    pub notifier: Option<Notifier>,
    pub stats: Arc<ProcessingStats>,
    pub start_time: Arc<Instant>,
    /// Cancelled on shutdown; in-flight resolutions are abandoned
    pub shutdown: CancellationToken,
}

impl<T: Transport, R: Renderer> AppState<T, R> {
    /// Creates state around `resolver`, sharing its statistics.
    pub fn new(
        resolver: Arc<Resolver<T, R>>,
        notifier: Option<Notifier>,
        shutdown: CancellationToken,
    ) -> Self {
        let stats = resolver.stats().clone();
        Self {
            resolver,
            notifier,
            stats,
            start_time: Arc::new(Instant::now()),
            shutdown,
        }
    }
}

// Manual impl: the derive would require `T: Clone` and `R: Clone`
impl<T, R> Clone for AppState<T, R> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            notifier: self.notifier.clone(),
            stats: self.stats.clone(),
            start_time: self.start_time.clone(),
            shutdown: self.shutdown.clone(),
        }
    }
}

/// Body of `POST /process-redirect`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRedirectRequest {
    #[serde(default)]
    pub pre_redirect_url: Option<String>,
}

/// Successful answer of `POST /process-redirect`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRedirectResponse {
    pub final_url: String,
    pub method: ResolutionMethod,
    pub message: &'static str,
}

/// Error (or shutdown) answer of `POST /process-redirect`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// JSON response for `/status` endpoint
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub total_requests: usize,
    pub caller_errors: usize,
    pub resolved: ResolvedCounts,
    pub failed: usize,
    pub escalations: usize,
    pub reprobes: usize,
    pub webhook_failures: usize,
    pub transport_errors: TransportErrorCounts,
    pub uptime_seconds: f64,
}

#[derive(Debug, Serialize)]
pub struct ResolvedCounts {
    pub total: usize,
    pub direct: usize,
    pub redirected: usize,
    pub rendered: usize,
}

#[derive(Debug, Serialize)]
pub struct TransportErrorCounts {
    pub total: usize,
    pub timeout: usize,
    pub connection_error: usize,
    pub other_error: usize,
}
