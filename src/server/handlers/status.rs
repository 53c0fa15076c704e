//! JSON status handler.

use axum::{extract::State, Json};

use super::super::types::{
    AppState, ResolvedCounts, StatusResponse, TransportErrorCounts,
};
use crate::error_handling::{ErrorType, InfoType};

/// JSON status endpoint with resolution counters
pub async fn status_handler<T, R>(State(state): State<AppState<T, R>>) -> Json<StatusResponse> {
    let stats = &state.stats;

    let timeout = stats.get_error_count(ErrorType::HttpRequestTimeoutError);
    let connection_error = stats.get_error_count(ErrorType::HttpRequestConnectError);
    let total_errors = stats.total_errors();

    Json(StatusResponse {
        total_requests: stats.get_info_count(InfoType::ResolutionRequested),
        caller_errors: stats.get_info_count(InfoType::CallerInputRejected),
        resolved: ResolvedCounts {
            total: stats.total_resolved(),
            direct: stats.get_info_count(InfoType::ResolvedDirect),
            redirected: stats.get_info_count(InfoType::ResolvedRedirected),
            rendered: stats.get_info_count(InfoType::ResolvedRendered),
        },
        failed: stats.get_info_count(InfoType::ResolutionFailed),
        escalations: stats.get_info_count(InfoType::Escalated),
        reprobes: stats.get_info_count(InfoType::Reprobed),
        webhook_failures: stats.get_info_count(InfoType::WebhookFailed),
        transport_errors: TransportErrorCounts {
            total: total_errors,
            timeout,
            connection_error,
            other_error: total_errors.saturating_sub(timeout + connection_error),
        },
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
    })
}
