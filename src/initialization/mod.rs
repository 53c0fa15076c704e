//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP clients for the probe and the webhook notifier
//! - The logger
//! - A resolver wired to the real transport and browser
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::{InitializationError, ProcessingStats};
use crate::notify::Notifier;
use crate::probe::HttpTransport;
use crate::render::{BrowserOptions, ChromeRenderer};
use crate::resolve::Resolver;

// Re-export public API
pub use client::{init_notify_client, init_probe_client};
pub use logger::init_logger_with;

/// Resolver backed by `reqwest` and a headless Chromium.
pub type DefaultResolver = Resolver<HttpTransport, ChromeRenderer>;

/// Builds a resolver from configuration.
///
/// The browser is not launched here; each render launches its own.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the probe client cannot be built.
pub fn init_resolver(
    config: &Config,
    stats: Arc<ProcessingStats>,
) -> Result<DefaultResolver, InitializationError> {
    let transport = HttpTransport::new(init_probe_client(config)?);
    let renderer = ChromeRenderer::new(BrowserOptions {
        executable: config.chrome_executable.clone(),
        no_sandbox: config.no_sandbox,
    });
    Ok(Resolver::from_config(transport, renderer, config).with_stats(stats))
}

/// Builds the optional result notifier.
///
/// Returns `Ok(None)` when no webhook is configured.
///
/// # Errors
///
/// Returns `InitializationError::InvalidWebhookUrl` if the configured URL does not
/// parse, or `InitializationError::HttpClientError` if the client cannot be built.
pub fn init_notifier(config: &Config) -> Result<Option<Notifier>, InitializationError> {
    let Some(raw) = config.webhook_url.as_deref() else {
        return Ok(None);
    };
    let endpoint = url::Url::parse(raw)
        .map_err(|e| InitializationError::InvalidWebhookUrl(format!("{}: {}", raw, e)))?;
    Ok(Some(Notifier::new(init_notify_client()?, endpoint)))
}
