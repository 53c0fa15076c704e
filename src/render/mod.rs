//! Render strategy.
//!
//! Loads a URL in an isolated, ephemeral browsing context, waits for network
//! idle, and reports the address the page ended up on. This is the expensive
//! fallback and only runs after an inconclusive probe.

mod chrome;
mod session;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use url::Url;

use crate::error_handling::RenderError;

pub use chrome::ChromeRenderer;
pub use session::BrowserOptions;

/// Capability to render a URL and report the post-navigation URL.
///
/// Implementations own their browsing context for the duration of the call and
/// must release it on every exit path, including when the future is dropped.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, url: &Url, timeout: Duration) -> Result<Url, RenderError>;
}

/// Result of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Resolved(Url),
    Failed(RenderError),
}

/// Expensive second-tier strategy.
pub struct RenderStrategy<R> {
    renderer: R,
    timeout: Duration,
}

impl<R: Renderer> RenderStrategy<R> {
    pub fn new(renderer: R, timeout: Duration) -> Self {
        Self { renderer, timeout }
    }

    /// Renders `url` within the configured budget. Never fails.
    ///
    /// On timeout the in-flight render future is dropped, which tears its
    /// browsing context down.
    pub async fn run(&self, url: &Url) -> RenderOutcome {
        let rendered = tokio::time::timeout(self.timeout, self.renderer.render(url, self.timeout))
            .await
            .unwrap_or_else(|_| Err(RenderError::Timeout(self.timeout)));

        match rendered {
            Ok(final_url) => RenderOutcome::Resolved(final_url),
            Err(e) => {
                debug!("Render of {} failed: {}", url, e);
                RenderOutcome::Failed(e)
            }
        }
    }
}
