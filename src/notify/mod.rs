//! Downstream notification of resolution results.
//!
//! When a webhook is configured, every successful resolution is POSTed to it as
//! `{"originalUrl", "finalUrl", "method"}`. Delivery is best-effort: a failed
//! notification is logged and counted, and never changes what the caller sees.

use log::{debug, warn};
use serde::Serialize;
use url::Url;

use crate::error_handling::{InfoType, NotifyError, ProcessingStats};
use crate::resolve::{ResolutionMethod, ResolutionResult};

/// Webhook payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Notification<'a> {
    original_url: &'a str,
    final_url: &'a str,
    method: ResolutionMethod,
}

/// Posts resolution results to a fixed webhook endpoint.
#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    endpoint: Url,
}

impl Notifier {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one notification.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::Request` if the request could not be sent, or
    /// `NotifyError::Status` if the endpoint answered with a non-2xx status.
    pub async fn notify(
        &self,
        original_url: &str,
        result: &ResolutionResult,
    ) -> Result<(), NotifyError> {
        let payload = Notification {
            original_url,
            final_url: result.final_url.as_str(),
            method: result.method,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }
        debug!("Webhook {} accepted result for {}", self.endpoint, original_url);
        Ok(())
    }

    /// Sends one notification, logging and counting a failure instead of returning it.
    pub async fn report(&self, original_url: &str, result: &ResolutionResult, stats: &ProcessingStats) {
        if let Err(e) = self.notify(original_url, result).await {
            warn!("Failed to notify {} for {}: {}", self.endpoint, original_url, e);
            stats.increment_info(InfoType::WebhookFailed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use serde_json::json;

    fn result() -> ResolutionResult {
        ResolutionResult::new(
            Url::parse("http://full.example/a").expect("valid URL"),
            ResolutionMethod::Redirected,
        )
    }

    fn notifier(server: &Server) -> Notifier {
        let endpoint = Url::parse(&server.url_str("/hook")).expect("valid URL");
        Notifier::new(reqwest::Client::new(), endpoint)
    }

    #[tokio::test]
    async fn test_notify_posts_json_payload() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/hook"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "originalUrl": "http://short.example/a",
                    "finalUrl": "http://full.example/a",
                    "method": "Redirected",
                })))),
            ])
            .respond_with(status_code(200)),
        );

        notifier(&server)
            .notify("http://short.example/a", &result())
            .await
            .expect("notification should be accepted");
    }

    #[tokio::test]
    async fn test_notify_non_success_status() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/hook"))
                .respond_with(status_code(503)),
        );

        let err = notifier(&server)
            .notify("http://short.example/a", &result())
            .await
            .expect_err("should fail");

        assert!(matches!(err, NotifyError::Status(503)));
    }

    #[tokio::test]
    async fn test_report_counts_failures() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/hook"))
                .respond_with(status_code(500)),
        );
        let stats = ProcessingStats::new();

        notifier(&server)
            .report("http://short.example/a", &result(), &stats)
            .await;

        assert_eq!(stats.get_info_count(InfoType::WebhookFailed), 1);
    }

    #[tokio::test]
    async fn test_report_unreachable_endpoint() {
        let endpoint = Url::parse("http://127.0.0.1:1/hook").expect("valid URL");
        let notifier = Notifier::new(reqwest::Client::new(), endpoint);
        let stats = ProcessingStats::new();

        notifier
            .report("http://short.example/a", &result(), &stats)
            .await;

        assert_eq!(stats.get_info_count(InfoType::WebhookFailed), 1);
    }

    #[tokio::test]
    async fn test_report_success_counts_nothing() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/hook"))
                .respond_with(status_code(204)),
        );
        let stats = ProcessingStats::new();

        notifier(&server)
            .report("http://short.example/a", &result(), &stats)
            .await;

        assert_eq!(stats.get_info_count(InfoType::WebhookFailed), 0);
    }
}
