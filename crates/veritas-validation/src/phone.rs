//! Brazilian phone number validation
//!
//! Accepted shapes, after removing whitespace, dots, hyphens and parentheses:
//! - `+55` + DDD + `9` + 8 digits (mobile)
//! - `+55` + DDD + 8 digits (landline)
//! - the same two without the `+55` country code

use thiserror::Error;

const COUNTRY_CODE: &str = "+55";

/// Area codes (DDD) in use, grouped by state
static VALID_DDDS: &[&str] = &[
    "11", "12", "13", "14", "15", "16", "17", "18", "19", // São Paulo
    "21", "22", "24", // Rio de Janeiro
    "27", "28", // Espírito Santo
    "31", "32", "33", "34", "35", "37", "38", // Minas Gerais
    "41", "42", "43", "44", "45", "46", // Paraná
    "47", "48", "49", // Santa Catarina
    "51", "53", "54", "55", // Rio Grande do Sul
    "61", // Distrito Federal
    "62", "64", // Goiás
    "63", // Tocantins
    "65", "66", // Mato Grosso
    "67", // Mato Grosso do Sul
    "68", // Acre
    "69", // Rondônia
    "71", "73", "74", "75", "77", // Bahia
    "79", // Sergipe
    "81", "87", // Pernambuco
    "82", // Alagoas
    "83", // Paraíba
    "84", // Rio Grande do Norte
    "85", "88", // Ceará
    "86", "89", // Piauí
    "91", "93", "94", // Pará
    "92", "97", // Amazonas
    "95", // Roraima
    "96", // Amapá
    "98", "99", // Maranhão
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("phone must be a string")]
    NotAString,

    #[error("phone cannot be empty")]
    Empty,

    #[error("invalid Brazilian phone number format")]
    InvalidFormat,

    #[error("invalid area code (DDD)")]
    InvalidAreaCode,

    #[error("mobile number must start with 9 after area code")]
    MissingMobilePrefix,

    #[error("invalid phone number digits")]
    InvalidDigits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneKind {
    Mobile,
    Landline,
}

/// Validates a Brazilian phone number
pub fn validate_phone(phone: &str) -> Result<(), PhoneError> {
    classify_phone(phone).map(|_| ())
}

pub fn is_valid_phone(phone: &str) -> bool {
    validate_phone(phone).is_ok()
}

/// Validates a phone number and reports whether it is mobile or landline
pub fn classify_phone(phone: &str) -> Result<PhoneKind, PhoneError> {
    let cleaned = clean_phone(phone);
    if cleaned.is_empty() {
        return Err(PhoneError::Empty);
    }

    let national = cleaned.strip_prefix(COUNTRY_CODE).unwrap_or(&cleaned);

    // Lengths are in bytes; any non-ASCII byte fails the DDD or digit checks
    match national.len() {
        11 => validate_mobile(national.as_bytes()).map(|_| PhoneKind::Mobile),
        10 => validate_landline(national.as_bytes()).map(|_| PhoneKind::Landline),
        _ => Err(PhoneError::InvalidFormat),
    }
}

/// Removes spaces, dots, hyphens and parentheses
pub fn clean_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '.' | '-' | '(' | ')'))
        .collect()
}

pub fn is_valid_ddd(ddd: &str) -> bool {
    VALID_DDDS.contains(&ddd)
}

/// DDD + `9` + 8 digits
fn validate_mobile(national: &[u8]) -> Result<(), PhoneError> {
    check_ddd(&national[..2])?;

    if national[2] != b'9' {
        return Err(PhoneError::MissingMobilePrefix);
    }

    check_subscriber_digits(&national[3..])
}

/// DDD + 8 digits
fn validate_landline(national: &[u8]) -> Result<(), PhoneError> {
    check_ddd(&national[..2])?;
    check_subscriber_digits(&national[2..])
}

fn check_ddd(ddd: &[u8]) -> Result<(), PhoneError> {
    match std::str::from_utf8(ddd) {
        Ok(ddd) if is_valid_ddd(ddd) => Ok(()),
        _ => Err(PhoneError::InvalidAreaCode),
    }
}

fn check_subscriber_digits(digits: &[u8]) -> Result<(), PhoneError> {
    if digits.iter().all(u8::is_ascii_digit) {
        Ok(())
    } else {
        Err(PhoneError::InvalidDigits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_mobiles() {
        for phone in [
            "+55 (41) 99504-8710",
            "(41) 99504-8710",
            "+55 41.99504.8710",
            "+55 41 99504 8710",
            "+5541995048710",
            "+55 11 98765-4321",
            "+55 ((41)) 99504-8710",
            " +55 41 99504-8710 ",
            "+55.41.99504-8710",
        ] {
            assert_eq!(classify_phone(phone), Ok(PhoneKind::Mobile), "{phone}");
        }
    }

    #[test]
    fn test_valid_landlines() {
        for phone in [
            "+55 (41) 3346-4468",
            "(41) 3346-4468",
            "+554133464468",
            "+55 21 2222-3333",
            "4133464468",
        ] {
            assert_eq!(classify_phone(phone), Ok(PhoneKind::Landline), "{phone}");
        }
    }

    #[test]
    fn test_invalid_format() {
        for phone in [
            "+55 41 123",
            "+55 41 123456789012",
            "+56 41 99504-8710",
            "5541995048710",
        ] {
            assert_eq!(validate_phone(phone), Err(PhoneError::InvalidFormat), "{phone}");
        }
    }

    #[test]
    fn test_invalid_area_code() {
        assert_eq!(
            validate_phone("+55 00 99504-8710"),
            Err(PhoneError::InvalidAreaCode)
        );
        assert_eq!(
            validate_phone("+55 20 3346-4468"),
            Err(PhoneError::InvalidAreaCode)
        );
        assert_eq!(validate_phone("+55 a1 3346-4468"), Err(PhoneError::InvalidAreaCode));
    }

    #[test]
    fn test_mobile_prefix_and_digits() {
        assert_eq!(
            validate_phone("+55 41 89504-8710"),
            Err(PhoneError::MissingMobilePrefix)
        );
        assert_eq!(
            validate_phone("+55 41 99504-871a"),
            Err(PhoneError::InvalidDigits)
        );
        assert_eq!(
            validate_phone("+55 41 3346-446x"),
            Err(PhoneError::InvalidDigits)
        );
    }

    #[test]
    fn test_empty_phone() {
        assert_eq!(validate_phone(""), Err(PhoneError::Empty));
        assert_eq!(validate_phone("   "), Err(PhoneError::Empty));
        assert_eq!(validate_phone("(-.)"), Err(PhoneError::Empty));
    }

    #[test]
    fn test_non_ascii_does_not_panic() {
        assert!(validate_phone("+55 41 9950ç-871").is_err());
        assert!(validate_phone("ção 9950-8710").is_err());
    }

    #[test]
    fn test_clean_phone() {
        assert_eq!(clean_phone("+55 (41) 99504-8710"), "+5541995048710");
        assert_eq!(clean_phone("41.3346.4468"), "4133464468");
    }
}
