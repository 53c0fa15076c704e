//! Error type definitions.
//!
//! This module defines the error taxonomy of the resolver and the event types
//! tracked in processing statistics.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::probe::ProbeCause;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured webhook is not an absolute URL.
    #[error("Invalid webhook URL: {0}")]
    InvalidWebhookUrl(String),
}

/// Rejected caller input.
///
/// Raised before any strategy runs; a caller error is never a resolution failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallerInputError {
    /// No URL (or only whitespace) was supplied.
    #[error("Missing URL")]
    MissingUrl,

    /// The URL exceeds `MAX_URL_LENGTH`.
    #[error("URL exceeds maximum length ({length} > {max})")]
    TooLong { length: usize, max: usize },

    /// The URL is not a well-formed absolute URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Only `http` and `https` can be probed and rendered.
    #[error("Unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),
}

/// Failure of the probe's HTTP call (DNS, connect, TLS, timeout...).
///
/// Always an escalation trigger, never fatal on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct TransportError {
    /// Categorized failure mode
    pub kind: ErrorType,
    /// Underlying error message, kept for diagnostics
    pub message: String,
}

impl TransportError {
    pub fn new(kind: ErrorType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ReqwestError> for TransportError {
    fn from(error: ReqwestError) -> Self {
        let kind = super::categorize_reqwest_error(&error);
        Self::new(kind, error.to_string())
    }
}

/// Failure while rendering a page in the browser.
///
/// Always fatal for the resolution, since rendering is the last strategy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The browser configuration could not be built.
    #[error("Browser configuration error: {0}")]
    Config(String),

    /// The browser process or its private profile could not be started.
    #[error("Browser launch error: {0}")]
    Launch(String),

    /// Opening the page or navigating to the URL failed.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// The render did not reach network idle within its budget.
    #[error("Render timed out after {0:?}")]
    Timeout(Duration),

    /// The page finished loading but reported no location.
    #[error("Page reported no location")]
    MissingLocation,

    /// The page reported a location that is not an absolute URL.
    #[error("Page reported an invalid location '{0}'")]
    InvalidLocation(String),
}

/// Both strategies were exhausted without producing a URL.
///
/// Carries the causes seen along the way for logging; callers only learn that
/// the URL could not be resolved.
#[derive(Error, Debug, Clone)]
#[error("Could not resolve {url}: {render} (probe: {probe})")]
pub struct ResolutionFailure {
    /// URL that was being resolved
    pub url: String,
    /// Why the probe escalated
    pub probe: ProbeCause,
    /// Why the render failed (the last-seen cause)
    pub render: RenderError,
}

/// Error returned by `Resolver::resolve`.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The input was rejected before any strategy ran.
    #[error(transparent)]
    Input(#[from] CallerInputError),

    /// Neither strategy produced a URL.
    #[error(transparent)]
    Failure(#[from] ResolutionFailure),
}

/// Error delivering the optional result webhook.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The webhook request could not be sent.
    #[error("Webhook request error: {0}")]
    Request(#[from] ReqwestError),

    /// The webhook answered with a non-success status.
    #[error("Webhook returned status {0}")]
    Status(u16),
}

/// Categories of probe transport failures.
///
/// Used for diagnostics and the `/status` counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    HttpRequestBuilderError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestOtherError,
}

/// Notable events of a resolution, counted for the `/status` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A resolution request was received
    ResolutionRequested,
    /// Input rejected before orchestration
    CallerInputRejected,
    /// Answered by a 2xx probe
    ResolvedDirect,
    /// Answered by a 302/307 `Location`
    ResolvedRedirected,
    /// Answered by the browser render
    ResolvedRendered,
    /// Probe was inconclusive and the render strategy ran
    Escalated,
    /// A 307 location was probed again
    Reprobed,
    /// Both strategies failed
    ResolutionFailed,
    /// The result webhook could not be delivered
    WebhookFailed,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::ResolutionRequested => "Resolution requested",
            InfoType::CallerInputRejected => "Caller input rejected",
            InfoType::ResolvedDirect => "Resolved directly",
            InfoType::ResolvedRedirected => "Resolved by redirect",
            InfoType::ResolvedRendered => "Resolved by render",
            InfoType::Escalated => "Escalated to render",
            InfoType::Reprobed => "Re-probed 307 location",
            InfoType::ResolutionFailed => "Resolution failed",
            InfoType::WebhookFailed => "Webhook failed",
        }
    }
}
