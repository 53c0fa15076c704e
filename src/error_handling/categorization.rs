//! Error categorization.
//!
//! This module maps transport errors onto `ErrorType` categories and records
//! them in processing statistics.

use super::stats::ProcessingStats;
use super::types::{ErrorType, TransportError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// The probe never calls `error_for_status`, so status codes are not part of
/// the categorization; non-success answers are classified by the probe itself.
///
/// Redirects are never followed and no body is read, so redirect, body and
/// decode failures cannot occur and fall into `HttpRequestOtherError`.
///
/// Timeouts are checked before connect errors because a connect timeout is
/// reported as both.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Records a transport failure in the processing statistics.
pub fn update_error_stats(stats: &ProcessingStats, error: &TransportError) {
    stats.increment_error(error.kind);
}
