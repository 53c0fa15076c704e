//! HTTP transport used by the probe.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderName, ACCEPT, ACCEPT_LANGUAGE, LOCATION};
use url::Url;

use super::types::ProbeResponse;
use crate::error_handling::TransportError;

/// Capability to perform one GET with redirect-following disabled.
///
/// Implementations must not follow redirects and must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn probe(&self, url: &Url, timeout: Duration) -> Result<ProbeResponse, TransportError>;
}

/// `reqwest`-backed transport.
///
/// The client must be built with `redirect::Policy::none()`
/// (see `initialization::init_probe_client`).
#[derive(Clone)]
pub struct HttpTransport {
    client: Arc<reqwest::Client>,
}

impl HttpTransport {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Adds browser-like request headers.
    ///
    /// Some shorteners answer unknown clients differently than browsers, which
    /// would make the probe disagree with the render fallback.
    fn apply_request_headers(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(HeaderName::from_static("sec-fetch-dest"), "document")
            .header(HeaderName::from_static("sec-fetch-mode"), "navigate")
            .header(HeaderName::from_static("upgrade-insecure-requests"), "1")
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn probe(&self, url: &Url, timeout: Duration) -> Result<ProbeResponse, TransportError> {
        let response = Self::apply_request_headers(self.client.get(url.clone()))
            .timeout(timeout)
            .send()
            .await?;

        // The body is never read; dropping the response releases the connection
        Ok(ProbeResponse {
            status: response.status().as_u16(),
            location: response
                .headers()
                .get(LOCATION)
                .map(|value| value.as_bytes().to_vec()),
            final_url: Some(response.url().clone()),
        })
    }
}
