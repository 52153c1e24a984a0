//! Numeric validation functions

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("number cannot be empty")]
    Empty,

    #[error("invalid number: {0}")]
    Invalid(String),

    #[error("unsupported number type: {0}")]
    UnsupportedType(&'static str),

    #[error("number must be positive")]
    NotPositive,

    #[error("number must be negative")]
    NotNegative,

    #[error("number must be even")]
    NotEven,

    #[error("number must be bigger than {0}")]
    NotBiggerThan(f64),

    #[error("number must be smaller than {0}")]
    NotSmallerThan(f64),

    #[error("number must be between {0} and {1}")]
    OutOfRange(f64, f64),

    #[error("prime number must be an integer")]
    PrimeNotInteger,

    #[error("number must be at least 2 to be prime")]
    PrimeTooSmall,

    #[error("number is not prime")]
    NotPrime,
}

/// Parses a textual number, ignoring surrounding whitespace
pub fn parse_number(text: &str) -> Result<f64, NumberError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NumberError::Empty);
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| NumberError::Invalid(trimmed.to_string()))
}

/// Strictly greater than zero
pub fn validate_positive(value: f64) -> Result<(), NumberError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(NumberError::NotPositive)
    }
}

/// Strictly less than zero
pub fn validate_negative(value: f64) -> Result<(), NumberError> {
    if value < 0.0 {
        Ok(())
    } else {
        Err(NumberError::NotNegative)
    }
}

/// Checks the integer part, so `4.7` counts as even
pub fn validate_even(value: f64) -> Result<(), NumberError> {
    if value.trunc() % 2.0 == 0.0 {
        Ok(())
    } else {
        Err(NumberError::NotEven)
    }
}

pub fn validate_bigger_than(value: f64, than: f64) -> Result<(), NumberError> {
    if value > than {
        Ok(())
    } else {
        Err(NumberError::NotBiggerThan(than))
    }
}

pub fn validate_smaller_than(value: f64, than: f64) -> Result<(), NumberError> {
    if value < than {
        Ok(())
    } else {
        Err(NumberError::NotSmallerThan(than))
    }
}

/// Validates value is within range (inclusive)
pub fn validate_between(value: f64, min: f64, max: f64) -> Result<(), NumberError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(NumberError::OutOfRange(min, max))
    }
}

/// Trial division up to the square root
pub fn validate_prime(value: f64) -> Result<(), NumberError> {
    if value.fract() != 0.0 || !value.is_finite() {
        return Err(NumberError::PrimeNotInteger);
    }
    if value < 2.0 {
        return Err(NumberError::PrimeTooSmall);
    }

    let n = value as u64;
    let mut divisor = 2u64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return Err(NumberError::NotPrime);
        }
        divisor += 1;
    }

    Ok(())
}
