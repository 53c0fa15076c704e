//! HTTP client initialization.
//!
//! The probe and the webhook notifier use separate clients: the probe must
//! never follow redirects, while the notifier is a plain JSON poster.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, WEBHOOK_TIMEOUT_SECS};
use reqwest::ClientBuilder;

/// Initializes the client used by the probe strategy.
///
/// Creates a `reqwest::Client` with:
/// - Redirect following disabled, so 3xx answers reach the classifier
/// - User-Agent header from the configuration
/// - Overall timeout from the configuration (each probe also sets its own)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_probe_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.probe_timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the client used to deliver result webhooks.
pub fn init_notify_client() -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(WEBHOOK_TIMEOUT_SECS))
        .build()
}
