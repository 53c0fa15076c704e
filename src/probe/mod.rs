//! Probe strategy.
//!
//! Issues a single request with redirect-following disabled and classifies the
//! raw answer into `Resolved`, `RedirectedTo`, or `Inconclusive`. Transport
//! failures are folded into `Inconclusive`; nothing is retried here.

mod classify;
mod transport;
mod types;


use std::time::Duration;

use log::debug;
use url::Url;

pub use classify::classify;
pub use transport::{HttpTransport, Transport};
pub use types::{ProbeCause, ProbeOutcome, ProbeResponse};

/// Cheap first-tier strategy.
pub struct ProbeStrategy<T> {
    transport: T,
    timeout: Duration,
}

impl<T: Transport> ProbeStrategy<T> {
    pub fn new(transport: T, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Probes `url` once and classifies the answer. Never fails.
    pub async fn run(&self, url: &Url) -> ProbeOutcome {
        match self.transport.probe(url, self.timeout).await {
            Ok(response) => {
                debug!("Probe of {} answered with status {}", url, response.status);
                classify(url, &response)
            }
            Err(e) => {
                debug!("Probe of {} failed: {}", url, e);
                ProbeOutcome::Inconclusive(ProbeCause::Transport(e))
            }
        }
    }
}
