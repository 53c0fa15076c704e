//! Caller input validation.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::CallerInputError;

/// Validates a caller-supplied source URL.
///
/// The input must be a non-empty, absolute `http`/`https` URL no longer than
/// `MAX_URL_LENGTH`. Surrounding whitespace is ignored. Unlike a scanner fed
/// from a file, no scheme is guessed: a bare host is a caller error.
pub fn parse_source_url(raw: &str) -> Result<Url, CallerInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CallerInputError::MissingUrl);
    }

    if trimmed.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            trimmed.len(),
            MAX_URL_LENGTH,
            trimmed.chars().take(50).collect::<String>()
        );
        return Err(CallerInputError::TooLong {
            length: trimmed.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = Url::parse(trimmed).map_err(|e| CallerInputError::InvalidUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CallerInputError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_url_accepts_http_and_https() {
        assert_eq!(
            parse_source_url("http://short.example/a").map(|u| u.to_string()),
            Ok("http://short.example/a".to_string())
        );
        assert_eq!(
            parse_source_url("https://short.example/a?b=c").map(|u| u.to_string()),
            Ok("https://short.example/a?b=c".to_string())
        );
    }

    #[test]
    fn test_parse_source_url_trims_whitespace() {
        let url = parse_source_url("  http://short.example/a\n").expect("should parse");
        assert_eq!(url.as_str(), "http://short.example/a");
    }

    #[test]
    fn test_parse_source_url_rejects_empty() {
        assert_eq!(parse_source_url(""), Err(CallerInputError::MissingUrl));
        assert_eq!(parse_source_url("   "), Err(CallerInputError::MissingUrl));
    }

    #[test]
    fn test_parse_source_url_rejects_relative() {
        assert!(matches!(
            parse_source_url("short.example/a"),
            Err(CallerInputError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_source_url("/a/b"),
            Err(CallerInputError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_parse_source_url_rejects_unsupported_scheme() {
        assert_eq!(
            parse_source_url("ftp://files.example/a"),
            Err(CallerInputError::UnsupportedScheme("ftp".to_string()))
        );
        assert_eq!(
            parse_source_url("javascript:alert(1)"),
            Err(CallerInputError::UnsupportedScheme("javascript".to_string()))
        );
    }

    #[test]
    fn test_parse_source_url_rejects_too_long() {
        let long = format!("http://short.example/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            parse_source_url(&long),
            Err(CallerInputError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_source_url_ipv6() {
        let url = parse_source_url("http://[2001:db8::1]:8080/a").expect("should parse");
        assert_eq!(url.port(), Some(8080));
    }
}
