//! Resolution data model.

use serde::Serialize;
use url::Url;

use crate::app::parse_source_url;
use crate::error_handling::CallerInputError;

/// A validated request to resolve one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    source_url: Url,
}

impl ResolutionRequest {
    /// Validates caller input. No strategy runs for rejected input.
    pub fn parse(raw: &str) -> Result<Self, CallerInputError> {
        parse_source_url(raw).map(|source_url| Self { source_url })
    }

    pub fn source_url(&self) -> &Url {
        &self.source_url
    }
}

/// Which strategy produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResolutionMethod {
    /// 2xx probe
    Direct,
    /// 302/307 `Location` from the probe
    Redirected,
    /// Browser render after an inconclusive probe
    Rendered,
}

impl std::fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ResolutionMethod::Direct => "Direct",
            ResolutionMethod::Redirected => "Redirected",
            ResolutionMethod::Rendered => "Rendered",
        })
    }
}

/// The answer returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    pub final_url: Url,
    pub method: ResolutionMethod,
}

impl ResolutionResult {
    pub fn new(final_url: Url, method: ResolutionMethod) -> Self {
        Self { final_url, method }
    }
}
