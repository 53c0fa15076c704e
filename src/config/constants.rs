//! Configuration constants.
//!
//! This module defines the defaults and limits used throughout the resolver:
//! timeouts for both strategies, redirect handling, input limits, and the
//! settings of the HTTP shell.

// Probe strategy
/// Per-request timeout for the probe in seconds
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

// Render strategy
/// Budget for one full render (launch + navigation + network idle + location read)
pub const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 30;
/// Maximum time to wait for the browser to expose its DevTools websocket
pub const BROWSER_LAUNCH_TIMEOUT_SECS: u64 = 20;
/// Chromium lifecycle event fired once a page has had no network connections
/// for its quiet window (~500ms)
pub const NETWORK_IDLE_EVENT: &str = "networkIdle";
/// Extra arguments applied with `--no-sandbox` (containers without a zygote-capable init)
pub const CONTAINER_BROWSER_ARGS: &[&str] = &["--single-process", "--no-zygote"];
/// Prefix of the per-render browser profile directory
pub const BROWSER_PROFILE_PREFIX: &str = "redirect-resolver-profile-";

// Redirect handling
/// Status codes the probe accepts as a redirect answer
pub const HTTP_STATUS_FOUND: u16 = 302;
pub const HTTP_STATUS_TEMPORARY_REDIRECT: u16 = 307;
/// Maximum number of 307 hops followed when re-probing is enabled
pub const DEFAULT_MAX_REPROBE_HOPS: usize = 10;

// Input validation
/// Maximum URL length (2048 characters), matching common browser and server limits
pub const MAX_URL_LENGTH: usize = 2048;

// HTTP shell
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
/// Route accepting `{"preRedirectUrl": "..."}`
pub const PROCESS_REDIRECT_PATH: &str = "/process-redirect";
pub const STATUS_PATH: &str = "/status";

/// Default User-Agent string for probe requests.
///
/// Uses a Chrome-like string so the probe sees the same server-side behavior a
/// browser would (some shorteners answer differently to unknown clients).
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Webhook notification
/// Timeout for the optional result webhook
pub const WEBHOOK_TIMEOUT_SECS: u64 = 10;
