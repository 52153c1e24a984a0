//! URL format validation
//!
//! Only the shape is checked here. Whether the URL answers is a separate,
//! opt-in step performed by callers that can do I/O.

use thiserror::Error;
use url::{ParseError, Url};

use crate::string::{clean_string, is_blank};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("URL must be a string")]
    NotAString,

    #[error("URL cannot be empty")]
    Empty,

    #[error("invalid URL format: {0}")]
    InvalidFormat(ParseError),

    #[error("URL must include a scheme (http:// or https://)")]
    MissingScheme,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL is not accessible: {0}")]
    Unreachable(String),

    #[error("URL returned status {0}, expected 200")]
    UnexpectedStatus(u16),
}

/// Validates URL format and returns the parsed URL
///
/// Surrounding whitespace is ignored. A scheme and a host are required, so
/// `example.com` and `mailto:user@example.com` are both rejected.
pub fn validate_url(raw: &str) -> Result<Url, UrlError> {
    let cleaned = clean_string(raw, false);
    if is_blank(&cleaned) {
        return Err(UrlError::Empty);
    }

    let parsed = Url::parse(&cleaned).map_err(|err| match err {
        ParseError::RelativeUrlWithoutBase => UrlError::MissingScheme,
        ParseError::EmptyHost => UrlError::MissingHost,
        other => UrlError::InvalidFormat(other),
    })?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(UrlError::MissingHost),
    }
}

pub fn is_valid_url(raw: &str) -> bool {
    validate_url(raw).is_ok()
}
