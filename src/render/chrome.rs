//! Headless Chromium renderer.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::page::EventLifecycleEvent;
use chromiumoxide::Page;
use futures::StreamExt;
use log::debug;
use url::Url;

use super::session::{BrowserOptions, BrowserSession};
use super::Renderer;
use crate::config::NETWORK_IDLE_EVENT;
use crate::error_handling::RenderError;

/// Renders pages in a fresh headless Chromium per call.
///
/// Nothing is shared between renders: every call gets its own process and
/// profile, and both are gone when `render` returns or its future is dropped.
#[derive(Debug, Clone, Default)]
pub struct ChromeRenderer {
    options: BrowserOptions,
}

impl ChromeRenderer {
    pub fn new(options: BrowserOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl Renderer for ChromeRenderer {
    async fn render(&self, url: &Url, timeout: Duration) -> Result<Url, RenderError> {
        let session = BrowserSession::launch(&self.options, timeout).await?;
        let result = navigate_and_read_location(&session, url).await;
        session.close().await;
        result
    }
}

async fn navigate_and_read_location(
    session: &BrowserSession,
    url: &Url,
) -> Result<Url, RenderError> {
    let page = session.new_page().await?;
    let mut lifecycle = page
        .event_listener::<EventLifecycleEvent>()
        .await
        .map_err(|e| RenderError::Navigation(e.to_string()))?;

    page.goto(url.as_str())
        .await
        .map_err(|e| RenderError::Navigation(e.to_string()))?;
    let main_frame = page
        .mainframe()
        .await
        .map_err(|e| RenderError::Navigation(e.to_string()))?;

    // A client-side redirect starts a new document in the main frame ("init"
    // with a fresh loader id); only network idle of the latest document counts.
    // Idle events of the initial about:blank arrive before any "init" and are skipped.
    let mut current_loader = None;
    while let Some(event) = lifecycle.next().await {
        if main_frame.as_ref().is_some_and(|frame| *frame != event.frame_id) {
            continue;
        }
        match event.name.as_str() {
            "init" => current_loader = Some(event.loader_id.clone()),
            NETWORK_IDLE_EVENT if current_loader.as_ref() == Some(&event.loader_id) => {
                debug!("Network idle reached for {}", url);
                break;
            }
            _ => {}
        }
    }

    read_location(&page).await
}

async fn read_location(page: &Page) -> Result<Url, RenderError> {
    let location = page
        .url()
        .await
        .map_err(|e| RenderError::Navigation(e.to_string()))?
        .ok_or(RenderError::MissingLocation)?;
    Url::parse(&location).map_err(|_| RenderError::InvalidLocation(location))
}
