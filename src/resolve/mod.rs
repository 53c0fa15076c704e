//! Resolution orchestrator.
//!
//! Runs the probe, and escalates to the render strategy only when the probe is
//! inconclusive:
//!
//! ```text
//! probe ── Resolved ─────────────▶ Direct
//!       ├─ RedirectedTo ─────────▶ Redirected
//!       └─ Inconclusive ─▶ render ── Resolved ─▶ Rendered
//!                                 └─ Failed ───▶ ResolutionFailure
//! ```
//!
//! Each resolution is one linear pass; nothing is retried and the render never
//! starts before the probe's outcome is known.

mod types;


use std::sync::Arc;

use log::{info, warn};
use url::Url;

use crate::config::{Config, RedirectPolicy, HTTP_STATUS_TEMPORARY_REDIRECT};
use crate::error_handling::{
    update_error_stats, InfoType, ProcessingStats, ResolutionFailure, ResolveError,
};
use crate::probe::{ProbeCause, ProbeOutcome, ProbeStrategy, Transport};
use crate::render::{RenderOutcome, RenderStrategy, Renderer};

pub use types::{ResolutionMethod, ResolutionRequest, ResolutionResult};

/// Two-tier URL resolver.
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent resolutions.
pub struct Resolver<T, R> {
    probe: ProbeStrategy<T>,
    render: RenderStrategy<R>,
    redirect_policy: RedirectPolicy,
    max_reprobe_hops: usize,
    stats: Arc<ProcessingStats>,
}

impl<T: Transport, R: Renderer> Resolver<T, R> {
    /// Creates a resolver that treats 307 like 302.
    pub fn new(probe: ProbeStrategy<T>, render: RenderStrategy<R>) -> Self {
        Self {
            probe,
            render,
            redirect_policy: RedirectPolicy::Terminal,
            max_reprobe_hops: 0,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Builds a resolver from configuration, with the timeouts and 307 policy it carries.
    pub fn from_config(transport: T, renderer: R, config: &Config) -> Self {
        Self::new(
            ProbeStrategy::new(transport, config.probe_timeout()),
            RenderStrategy::new(renderer, config.render_timeout()),
        )
        .with_redirect_policy(config.redirect_policy, config.max_reprobe_hops)
    }

    pub fn with_redirect_policy(mut self, policy: RedirectPolicy, max_reprobe_hops: usize) -> Self {
        self.redirect_policy = policy;
        self.max_reprobe_hops = max_reprobe_hops;
        self
    }

    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Resolves a caller-supplied URL.
    ///
    /// Invalid input is rejected with `ResolveError::Input` before any strategy
    /// runs. Otherwise exactly one of a `ResolutionResult` or a
    /// `ResolveError::Failure` is produced.
    pub async fn resolve(&self, raw_url: &str) -> Result<ResolutionResult, ResolveError> {
        self.stats.increment_info(InfoType::ResolutionRequested);
        let request = ResolutionRequest::parse(raw_url).inspect_err(|e| {
            warn!("Rejected resolution input: {}", e);
            self.stats.increment_info(InfoType::CallerInputRejected);
        })?;
        Ok(self.resolve_request(&request).await?)
    }

    /// Resolves an already validated request.
    pub async fn resolve_request(
        &self,
        request: &ResolutionRequest,
    ) -> Result<ResolutionResult, ResolutionFailure> {
        let source = request.source_url();

        let probe_cause = match self.probe_with_policy(source).await {
            Ok(result) => {
                info!("{} resolved to {} ({})", source, result.final_url, result.method);
                self.record_success(result.method);
                return Ok(result);
            }
            Err(cause) => cause,
        };

        info!(
            "Probe of {} inconclusive ({}), escalating to render",
            source, probe_cause
        );
        self.stats.increment_info(InfoType::Escalated);
        if let ProbeCause::Transport(e) = &probe_cause {
            update_error_stats(&self.stats, e);
        }

        match self.render.run(source).await {
            RenderOutcome::Resolved(final_url) => {
                info!("{} resolved to {} (Rendered)", source, final_url);
                self.record_success(ResolutionMethod::Rendered);
                Ok(ResolutionResult::new(final_url, ResolutionMethod::Rendered))
            }
            RenderOutcome::Failed(render) => {
                let failure = ResolutionFailure {
                    url: source.to_string(),
                    probe: probe_cause,
                    render,
                };
                warn!("{}", failure);
                self.stats.increment_info(InfoType::ResolutionFailed);
                Err(failure)
            }
        }
    }

    /// Runs the probe, following 307 answers when the policy asks for it.
    ///
    /// `Err` carries the cause of an inconclusive probe. An inconclusive hop
    /// inside a 307 chain escalates the whole resolution; hop exhaustion
    /// answers with the last location seen.
    async fn probe_with_policy(&self, source: &Url) -> Result<ResolutionResult, ProbeCause> {
        let mut outcome = self.probe.run(source).await;
        let mut hops = 0;

        loop {
            match outcome {
                ProbeOutcome::Resolved(final_url) if hops == 0 => {
                    return Ok(ResolutionResult::new(final_url, ResolutionMethod::Direct))
                }
                ProbeOutcome::Resolved(final_url) => {
                    return Ok(ResolutionResult::new(final_url, ResolutionMethod::Redirected))
                }
                ProbeOutcome::RedirectedTo { location, status }
                    if status == HTTP_STATUS_TEMPORARY_REDIRECT
                        && self.redirect_policy == RedirectPolicy::Reprobe
                        && hops < self.max_reprobe_hops =>
                {
                    hops += 1;
                    self.stats.increment_info(InfoType::Reprobed);
                    info!("Re-probing 307 location {} (hop {})", location, hops);
                    outcome = self.probe.run(&location).await;
                }
                ProbeOutcome::RedirectedTo { location, .. } => {
                    return Ok(ResolutionResult::new(location, ResolutionMethod::Redirected))
                }
                ProbeOutcome::Inconclusive(cause) => return Err(cause),
            }
        }
    }

    fn record_success(&self, method: ResolutionMethod) {
        self.stats.increment_info(match method {
            ResolutionMethod::Direct => InfoType::ResolvedDirect,
            ResolutionMethod::Redirected => InfoType::ResolvedRedirected,
            ResolutionMethod::Rendered => InfoType::ResolvedRendered,
        });
    }
}
