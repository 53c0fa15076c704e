//! redirect_resolver library: find where a URL finally lands
//!
//! A URL is first probed with a single request that does not follow redirects.
//! A `2xx` answer or a `302`/`307` with a usable `Location` settles it. Anything
//! else (timeouts, refused connections, error statuses, malformed redirects)
//! escalates to a headless Chromium render, which also sees JavaScript and
//! meta-refresh redirects.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use redirect_resolver::initialization::init_resolver;
//! use redirect_resolver::{Config, ProcessingStats};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let resolver = init_resolver(&config, Arc::new(ProcessingStats::new()))?;
//!
//! let result = resolver.resolve("http://short.example/a").await?;
//! println!("{} ({})", result.final_url, result.method);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Rendering needs a Chromium or Chrome
//! binary, found on the `PATH` or set through `Config::chrome_executable`.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod notify;
pub mod probe;
pub mod render;
pub mod resolve;
pub mod server;

// Re-export public API
pub use config::{Command, Config, LogFormat, LogLevel, RedirectPolicy};
pub use error_handling::{
    CallerInputError, ProcessingStats, RenderError, ResolutionFailure, ResolveError,
    TransportError,
};
pub use notify::Notifier;
pub use probe::{HttpTransport, ProbeResponse, Transport};
pub use render::{BrowserOptions, ChromeRenderer, Renderer};
pub use resolve::{ResolutionMethod, ResolutionRequest, ResolutionResult, Resolver};
pub use run::{resolve_urls, run_server, ResolveReport};

// Entry points used by the binary
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use futures::future::join_all;
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{join_signal_listener, log_final_statistics, shutdown_on_signal};
    use crate::config::Config;
    use crate::error_handling::ProcessingStats;
    use crate::initialization::{init_notifier, init_resolver};
    use crate::resolve::ResolutionResult;
    use crate::server::{start_server, AppState};

    /// Outcome of a one-shot `resolve` run, in input order.
    #[derive(Debug)]
    pub struct ResolveReport {
        /// Each input with its result, or the message of the error it produced
        pub results: Vec<(String, Result<ResolutionResult, String>)>,
        /// Number of URLs resolved
        pub successful: usize,
        /// Number of URLs rejected or not resolved
        pub failed: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the HTTP shell until ctrl-c or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver or notifier cannot be initialized, or if
    /// the listener cannot be bound.
    pub async fn run_server(config: Config) -> Result<()> {
        let stats = Arc::new(ProcessingStats::new());
        let resolver = init_resolver(&config, stats.clone())
            .context("Failed to initialize resolver")?;
        let notifier = init_notifier(&config).context("Failed to initialize webhook notifier")?;
        if let Some(notifier) = &notifier {
            info!("Results will be posted to {}", notifier.endpoint());
        }

        let shutdown = CancellationToken::new();
        let signal_listener = tokio::spawn(shutdown_on_signal(shutdown.clone()));

        let start_time = Instant::now();
        let state = AppState::new(Arc::new(resolver), notifier, shutdown.clone());
        let served = start_server(&config.bind, config.port, state).await;

        shutdown.cancel();
        join_signal_listener(signal_listener).await;
        log_final_statistics(&stats, start_time.elapsed().as_secs_f64());
        served
    }

    /// Resolves `urls` concurrently and reports each result.
    ///
    /// Individual failures are part of the report, not an `Err`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the resolver or notifier cannot be initialized.
    pub async fn resolve_urls(config: &Config, urls: &[String]) -> Result<ResolveReport> {
        let stats = Arc::new(ProcessingStats::new());
        let resolver = init_resolver(config, stats.clone())
            .context("Failed to initialize resolver")?;
        let notifier = init_notifier(config).context("Failed to initialize webhook notifier")?;

        let start_time = Instant::now();
        let results = join_all(urls.iter().map(|url| {
            let resolver = &resolver;
            let notifier = notifier.as_ref();
            let stats = &stats;
            async move {
                let result = resolver.resolve(url).await;
                if let (Ok(result), Some(notifier)) = (&result, notifier) {
                    notifier.report(url.trim(), result, stats).await;
                }
                (url.clone(), result.map_err(|e| e.to_string()))
            }
        }))
        .await;

        let successful = results.iter().filter(|(_, r)| r.is_ok()).count();
        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        log_final_statistics(&stats, elapsed_seconds);

        Ok(ResolveReport {
            failed: results.len() - successful,
            successful,
            results,
            elapsed_seconds,
        })
    }
}
