//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_MAX_REPROBE_HOPS, DEFAULT_PORT, DEFAULT_PROBE_TIMEOUT_SECS,
    DEFAULT_RENDER_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How a `307 Temporary Redirect` answer from the probe is treated.
///
/// A 302 is always a terminal answer. A 307 asks the client to repeat the
/// request against the new location, so deployments that care about the
/// address the chain finally settles on can ask for it to be re-probed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RedirectPolicy {
    /// Accept the 307 `Location` as the final destination, exactly like a 302
    Terminal,
    /// Probe the 307 `Location` again, up to `max_reprobe_hops`
    Reprobe,
}

/// Shell the binary runs.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve `POST /process-redirect` and `GET /status` over HTTP
    Serve,
    /// Resolve the given URLs once and print the results
    Resolve {
        /// Absolute URLs to resolve
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

/// Resolver configuration.
///
/// Parsed from the command line (with environment fallbacks) by the binary, or
/// built programmatically through `Default` by library users.
///
/// # Examples
///
/// ```bash
/// # Serve on the default port (3000)
/// redirect_resolver serve
///
/// # Resolve a single URL, re-probing 307 answers
/// redirect_resolver --redirect-307 reprobe resolve http://short.example/a
///
/// # Containerized Chromium
/// CHROME_EXECUTABLE=/usr/bin/chromium redirect_resolver --no-sandbox serve
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "redirect_resolver",
    about = "Resolves where a URL finally lands, including JavaScript and meta-refresh redirects."
)]
pub struct Config {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Address the HTTP shell binds to
    #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Port the HTTP shell listens on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Probe request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT_SECS)]
    pub probe_timeout_seconds: u64,

    /// Budget for a full browser render in seconds
    #[arg(long, default_value_t = DEFAULT_RENDER_TIMEOUT_SECS)]
    pub render_timeout_seconds: u64,

    /// HTTP User-Agent header value used by the probe
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Treatment of 307 answers: terminal|reprobe
    #[arg(long = "redirect-307", value_enum, default_value_t = RedirectPolicy::Terminal)]
    pub redirect_policy: RedirectPolicy,

    /// Maximum 307 hops followed when `--redirect-307 reprobe` is set
    #[arg(long, default_value_t = DEFAULT_MAX_REPROBE_HOPS)]
    pub max_reprobe_hops: usize,

    /// Chromium/Chrome executable (auto-detected when unset)
    #[arg(long, env = "CHROME_EXECUTABLE")]
    pub chrome_executable: Option<PathBuf>,

    /// Run the browser without its sandbox (needed in most containers)
    #[arg(long, env = "CHROME_NO_SANDBOX")]
    pub no_sandbox: bool,

    /// Webhook notified with `{originalUrl, finalUrl, method}` after each resolution
    #[arg(long, env = "REDIRECT_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// What to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Config {
    /// Probe timeout as a `Duration`.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_seconds)
    }

    /// Render budget as a `Duration`.
    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            probe_timeout_seconds: DEFAULT_PROBE_TIMEOUT_SECS,
            render_timeout_seconds: DEFAULT_RENDER_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            redirect_policy: RedirectPolicy::Terminal,
            max_reprobe_hops: DEFAULT_MAX_REPROBE_HOPS,
            chrome_executable: None,
            no_sandbox: false,
            webhook_url: None,
            command: None,
        }
    }
}
