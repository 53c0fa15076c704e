//! `POST /process-redirect` handler.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use log::{info, warn};
use uuid::Uuid;

use super::super::types::{
    AppState, MessageResponse, ProcessRedirectRequest, ProcessRedirectResponse,
};
use crate::error_handling::{CallerInputError, ResolveError};
use crate::probe::Transport;
use crate::render::Renderer;

const MISSING_URL_MESSAGE: &str = "Missing preRedirectUrl parameter";
const COMPLETED_MESSAGE: &str = "Redirect processing completed";
const FAILED_MESSAGE: &str = "Redirect processing failed";
const SHUTTING_DOWN_MESSAGE: &str = "Server shutting down";

/// Resolves `preRedirectUrl` and answers with the final URL.
///
/// The body is parsed leniently: a missing body, malformed JSON or a missing
/// field are all reported as a missing parameter. Validation of the URL itself
/// is left to the resolver.
pub async fn process_redirect_handler<T, R>(
    State(state): State<AppState<T, R>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response
where
    T: Transport + 'static,
    R: Renderer + 'static,
{
    let request_id = Uuid::new_v4();
    info!(
        "[{}] {} {} body={}",
        request_id,
        method,
        uri.path(),
        String::from_utf8_lossy(&body)
    );

    let request: ProcessRedirectRequest = serde_json::from_slice(&body).unwrap_or_default();
    let raw_url = request.pre_redirect_url.unwrap_or_default();

    let outcome = tokio::select! {
        _ = state.shutdown.cancelled() => {
            warn!("[{}] Abandoned resolution of {} on shutdown", request_id, raw_url);
            return message(StatusCode::SERVICE_UNAVAILABLE, SHUTTING_DOWN_MESSAGE);
        }
        outcome = state.resolver.resolve(&raw_url) => outcome,
    };

    match outcome {
        Ok(result) => {
            info!(
                "[{}] {} -> {} ({})",
                request_id, raw_url, result.final_url, result.method
            );
            if let Some(notifier) = &state.notifier {
                notifier.report(raw_url.trim(), &result, &state.stats).await;
            }
            (
                StatusCode::OK,
                Json(ProcessRedirectResponse {
                    final_url: result.final_url.to_string(),
                    method: result.method,
                    message: COMPLETED_MESSAGE,
                }),
            )
                .into_response()
        }
        Err(ResolveError::Input(CallerInputError::MissingUrl)) => {
            info!("[{}] Rejected: missing URL", request_id);
            message(StatusCode::BAD_REQUEST, MISSING_URL_MESSAGE)
        }
        Err(ResolveError::Input(e)) => {
            info!("[{}] Rejected: {}", request_id, e);
            message(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(ResolveError::Failure(failure)) => {
            // The cause is logged by the resolver; callers only learn that it failed
            info!("[{}] Failed to resolve {}", request_id, failure.url);
            message(StatusCode::INTERNAL_SERVER_ERROR, FAILED_MESSAGE)
        }
    }
}

fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(MessageResponse::new(message))).into_response()
}
