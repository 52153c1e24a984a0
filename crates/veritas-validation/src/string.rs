//! String helpers and length validation

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StringError {
    #[error("value must be a string")]
    NotAString,

    #[error("string must be at least {min} characters long")]
    TooShort { min: usize, found: usize },

    #[error("string must be at most {max} characters long")]
    TooLong { max: usize, found: usize },
}

/// Trims surrounding whitespace, optionally lowercasing the rest
pub fn clean_string(s: &str, to_lower: bool) -> String {
    let cleaned = s.trim();
    if to_lower {
        cleaned.to_lowercase()
    } else {
        cleaned.to_string()
    }
}

/// True when the string is empty or only whitespace
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn is_not_blank(s: &str) -> bool {
    !is_blank(s)
}

/// Validates string length, counted in characters rather than bytes
pub fn validate_length(s: &str, min: usize, max: usize) -> Result<(), StringError> {
    let found = s.chars().count();

    if found < min {
        return Err(StringError::TooShort { min, found });
    }
    if found > max {
        return Err(StringError::TooLong { max, found });
    }

    Ok(())
}

/// Regex pattern matching
///
/// An invalid pattern is reported as an error instead of a non-match.
pub fn matches_regex(value: &str, pattern: &str) -> Result<bool, regex::Error> {
    let regex = regex::Regex::new(pattern)?;
    Ok(regex.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_string() {
        assert_eq!(clean_string("  Hello World  ", false), "Hello World");
        assert_eq!(clean_string("  Hello World  ", true), "hello world");
        assert_eq!(clean_string("\t\nHello\tWorld\n", false), "Hello\tWorld");
        assert_eq!(clean_string("\t\nHello\tWorld\n", true), "hello\tworld");
        assert_eq!(clean_string("   ", true), "");
        assert_eq!(clean_string("  Hello@World#123  ", true), "hello@world#123");
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
        assert!(is_not_blank("a"));
    }

    #[test]
    fn test_length_validators() {
        assert!(validate_length("hello", 3, 10).is_ok());
        assert!(validate_length("abc", 3, 3).is_ok());
        assert!(validate_length("", 0, 0).is_ok());

        assert_eq!(
            validate_length("hi", 3, 10).unwrap_err().to_string(),
            "string must be at least 3 characters long"
        );
        assert_eq!(
            validate_length("verylongstring", 3, 10).unwrap_err().to_string(),
            "string must be at most 10 characters long"
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // 4 characters, 6 bytes
        assert!(validate_length("ação", 4, 4).is_ok());
        assert!(validate_length("日本語", 3, 3).is_ok());
        assert!(validate_length("🦀🦀", 3, 5).is_err());
    }

    #[test]
    fn test_matches_regex() {
        assert_eq!(matches_regex("abc123", r"^[a-z]+\d+$").unwrap(), true);
        assert_eq!(matches_regex("ABC", r"^[a-z]+$").unwrap(), false);
        assert!(matches_regex("abc", "(unclosed").is_err());
    }
}
