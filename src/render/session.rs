//! Scoped browser session.
//!
//! A `BrowserSession` owns everything one render acquires: the Chromium child
//! process, the task driving its DevTools connection, and a private profile
//! directory. `close` is the orderly path; dropping the session on any other
//! path (error, timeout, cancelled future) still releases all three.

use std::fmt::Display;
use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::{Stream, StreamExt};
use log::{debug, warn};
use tempfile::TempDir;
use tokio::task::JoinHandle;

use crate::config::{BROWSER_LAUNCH_TIMEOUT_SECS, BROWSER_PROFILE_PREFIX, CONTAINER_BROWSER_ARGS};
use crate::error_handling::RenderError;

/// How to launch the browser.
#[derive(Debug, Clone, Default)]
pub struct BrowserOptions {
    /// Executable to run; auto-detected when `None`
    pub executable: Option<PathBuf>,
    /// Disable the sandbox (containers)
    pub no_sandbox: bool,
}

pub(crate) struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    // Dropped after `browser`, so the profile outlives the process using it
    _profile: TempDir,
}

impl BrowserSession {
    /// Launches an isolated headless browser.
    pub(crate) async fn launch(
        options: &BrowserOptions,
        request_timeout: Duration,
    ) -> Result<Self, RenderError> {
        let profile = tempfile::Builder::new()
            .prefix(BROWSER_PROFILE_PREFIX)
            .tempdir()
            .map_err(|e| RenderError::Launch(format!("profile directory: {}", e)))?;

        let mut builder = BrowserConfig::builder()
            .user_data_dir(profile.path())
            .launch_timeout(Duration::from_secs(BROWSER_LAUNCH_TIMEOUT_SECS))
            .request_timeout(request_timeout);
        if let Some(executable) = &options.executable {
            builder = builder.chrome_executable(executable);
        }
        if options.no_sandbox {
            builder = builder.no_sandbox().args(CONTAINER_BROWSER_ARGS.iter().copied());
        }
        let config = builder.build().map_err(RenderError::Config)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| RenderError::Launch(e.to_string()))?;

        // The connection only makes progress while the handler stream is polled
        let handler = tokio::spawn(async move {
            drive_connection(&mut handler).await;
        });

        Ok(Self {
            browser,
            handler,
            _profile: profile,
        })
    }

    /// Opens a blank page, so listeners can be attached before navigating.
    pub(crate) async fn new_page(&self) -> Result<Page, RenderError> {
        self.browser
            .new_page("about:blank")
            .await
            .map_err(|e| RenderError::Navigation(e.to_string()))
    }

    /// Closes the browser and reaps the process.
    ///
    /// Failures are logged only: the process is killed on drop regardless.
    pub(crate) async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to reap browser process: {}", e);
        }
    }
}

/// Polls the DevTools connection until the browser closes it.
///
/// Errors are per message (typically an event newer than the bundled protocol
/// bindings) and do not end the stream; only `None` does. Returns the number of
/// errors skipped.
pub(crate) async fn drive_connection<S, E>(handler: &mut S) -> usize
where
    S: Stream<Item = Result<(), E>> + Unpin,
    E: Display,
{
    let mut skipped = 0;
    while let Some(event) = handler.next().await {
        if let Err(e) = event {
            debug!("Ignoring browser connection error: {}", e);
            skipped += 1;
        }
    }
    debug!("Browser connection closed");
    skipped
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        // The child process is spawned with kill-on-drop; the handler task
        // would otherwise keep polling a dead connection.
        self.handler.abort();
    }
}
