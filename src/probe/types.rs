//! Probe data types.

use thiserror::Error;
use url::Url;

use crate::error_handling::TransportError;

/// Raw answer of a single non-redirect-following request.
///
/// Only the parts the classifier looks at are kept: the status code, the raw
/// `Location` header bytes, and the URL the transport reports having reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw `Location` header value, if present
    pub location: Option<Vec<u8>>,
    /// URL the transport actually reached (after any transport-internal hop)
    pub final_url: Option<Url>,
}

impl ProbeResponse {
    /// Response without a `Location` header or reported URL.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            location: None,
            final_url: None,
        }
    }

    /// Adds a `Location` header.
    pub fn with_location(mut self, location: impl AsRef<[u8]>) -> Self {
        self.location = Some(location.as_ref().to_vec());
        self
    }

    /// Adds the URL the transport reports having reached.
    pub fn with_final_url(mut self, final_url: Url) -> Self {
        self.final_url = Some(final_url);
        self
    }
}

/// Classification of a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 2xx answer; the URL the transport reached is authoritative.
    Resolved(Url),
    /// 302 or 307 answer with a usable `Location`.
    RedirectedTo { location: Url, status: u16 },
    /// Anything else; the single escalation trigger.
    Inconclusive(ProbeCause),
}

/// Why a probe was inconclusive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeCause {
    /// Status is neither 2xx nor an accepted redirect.
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),

    /// Redirect status without a `Location` header.
    #[error("status {0} without a Location header")]
    MissingLocation(u16),

    /// Redirect status whose `Location` is not a usable URL.
    #[error("status {status} with malformed Location '{location}'")]
    MalformedLocation { status: u16, location: String },

    /// The request itself failed.
    #[error(transparent)]
    Transport(TransportError),
}
