//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::string::{clean_string, is_blank};

// Email validation regex
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("email must be a string")]
    NotAString,

    #[error("email cannot be empty")]
    Empty,

    #[error("invalid email format")]
    InvalidFormat,
}

/// Validates email format
///
/// The address is trimmed and lowercased before matching, so
/// `"  User@Example.COM "` is accepted.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    validate_email_with(email, true)
}

/// Same as [`validate_email`], with lowercasing made optional
///
/// Lowercasing is ASCII-only, so the flag never changes validity. Unicode
/// lowercasing would fold `'\u{212A}'` (Kelvin sign) into `'k'`.
pub fn validate_email_with(email: &str, to_lower: bool) -> Result<(), EmailError> {
    let mut cleaned = clean_string(email, false);
    if to_lower {
        cleaned.make_ascii_lowercase();
    }
    if is_blank(&cleaned) {
        return Err(EmailError::Empty);
    }

    if !EMAIL_REGEX.is_match(&cleaned) {
        return Err(EmailError::InvalidFormat);
    }

    Ok(())
}

/// Canonical form of an address: trimmed, ASCII letters lowercased
pub fn normalize_email(email: &str) -> String {
    clean_string(email, false).to_ascii_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}
