//! Probe response classification.
//!
//! Pure status and header inspection. Nothing here touches the network.

use url::Url;

use super::types::{ProbeCause, ProbeOutcome, ProbeResponse};
use crate::config::{HTTP_STATUS_FOUND, HTTP_STATUS_TEMPORARY_REDIRECT};

/// Classifies the raw answer to a probe of `request_url`.
///
/// - 2xx: `Resolved` with the URL the transport reports, or `request_url`.
/// - 302 / 307 with a usable `Location`: `RedirectedTo`. Relative locations are
///   joined against the URL that answered.
/// - anything else: `Inconclusive`.
///
/// The reported location is the WHATWG-parsed form of the header, not its raw
/// bytes: scheme and host are lowercased, an empty path becomes `/`, and spaces
/// and other unsafe characters are percent-encoded.
pub fn classify(request_url: &Url, response: &ProbeResponse) -> ProbeOutcome {
    let answered_by = response.final_url.as_ref().unwrap_or(request_url);

    match response.status {
        200..=299 => ProbeOutcome::Resolved(answered_by.clone()),
        HTTP_STATUS_FOUND | HTTP_STATUS_TEMPORARY_REDIRECT => {
            let Some(raw) = response.location.as_deref() else {
                return ProbeOutcome::Inconclusive(ProbeCause::MissingLocation(response.status));
            };
            match parse_location(answered_by, raw) {
                Some(location) => ProbeOutcome::RedirectedTo {
                    location,
                    status: response.status,
                },
                None => ProbeOutcome::Inconclusive(ProbeCause::MalformedLocation {
                    status: response.status,
                    location: String::from_utf8_lossy(raw).into_owned(),
                }),
            }
        }
        status => ProbeOutcome::Inconclusive(ProbeCause::UnexpectedStatus(status)),
    }
}

/// Parses a `Location` value, absolute or relative to `base`.
///
/// Returns `None` for non-UTF-8, empty, or unparseable values.
fn parse_location(base: &Url, raw: &[u8]) -> Option<Url> {
    let value = std::str::from_utf8(raw).ok()?.trim();
    if value.is_empty() {
        return None;
    }
    Url::parse(value).or_else(|_| base.join(value)).ok()
}
