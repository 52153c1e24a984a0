//! Brazilian tax identifier validation (CPF and CNPJ)
//!
//! Both documents go through the same steps:
//! 1. Keep only the ASCII digits of the input
//! 2. Require the exact digit count (11 for CPF, 14 for CNPJ)
//! 3. Reject a single digit repeated over the whole length
//! 4. Recompute both trailing check digits (weighted sum, modulo 11)
//! 5. Compare them with the supplied ones
//!
//! Only the first failing step is reported.

use std::fmt;
use std::iter;

use thiserror::Error;

/// Brazilian tax identifier kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    /// Cadastro de Pessoas Físicas (individuals), 11 digits
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (organizations), 14 digits
    Cnpj,
}

impl Document {
    /// Short uppercase name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Document::Cpf => "CPF",
            Document::Cnpj => "CNPJ",
        }
    }

    /// Number of digits, check digits included
    pub const fn digit_count(self) -> usize {
        match self {
            Document::Cpf => 11,
            Document::Cnpj => 14,
        }
    }

    /// Number of digits before the two check digits
    pub const fn base_len(self) -> usize {
        self.digit_count() - 2
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a CPF or CNPJ was rejected, in the order the checks run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DocumentError {
    /// The raw value was not text. Raised by callers holding dynamic values.
    #[error("{0} must be a string")]
    NotAString(Document),

    #[error("{document} must have exactly {expected} digits")]
    Length {
        document: Document,
        expected: usize,
        found: usize,
    },

    #[error("{0} cannot be a sequence of identical digits")]
    IdenticalDigits(Document),

    #[error("invalid {0} check digits")]
    CheckDigits(Document),
}

impl DocumentError {
    /// The document the error was raised for
    pub fn document(&self) -> Document {
        match *self {
            DocumentError::NotAString(document)
            | DocumentError::Length { document, .. }
            | DocumentError::IdenticalDigits(document)
            | DocumentError::CheckDigits(document) => document,
        }
    }
}

/// Strips every character that is not an ASCII digit, keeping order
///
/// Never fails: letters are dropped rather than rejected, so `"1234567890a"`
/// becomes a 10-digit string and is later rejected on length.
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates a CPF in any punctuation (`"111.444.777-35"`, `"11144477735"`)
pub fn validate_cpf(raw: &str) -> Result<(), DocumentError> {
    validate_document(Document::Cpf, raw)
}

/// Validates a CNPJ in any punctuation (`"11.222.333/0001-81"`, `"11222333000181"`)
pub fn validate_cnpj(raw: &str) -> Result<(), DocumentError> {
    validate_document(Document::Cnpj, raw)
}

pub fn is_valid_cpf(raw: &str) -> bool {
    validate_cpf(raw).is_ok()
}

pub fn is_valid_cnpj(raw: &str) -> bool {
    validate_cnpj(raw).is_ok()
}

/// Runs the full document pipeline on already-textual input
pub fn validate_document(document: Document, raw: &str) -> Result<(), DocumentError> {
    let digits = normalize_digits(raw);
    check_structure(document, &digits)?;

    let values: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();
    let (base, supplied) = values.split_at(document.base_len());

    let computed = compute_pair(document, base);
    if supplied != computed.as_slice() {
        return Err(DocumentError::CheckDigits(document));
    }

    Ok(())
}

/// Computes the two check digits for the base digits of a document
///
/// Returns `None` when `base` is shorter than the document's base length
/// or holds a value above 9. Digits past the base length are ignored.
pub fn check_digits(document: Document, base: &[u32]) -> Option<[u32; 2]> {
    let base = base.get(..document.base_len())?;
    if base.iter().any(|digit| *digit > 9) {
        return None;
    }
    Some(compute_pair(document, base))
}

/// Length first, then the repeated-digit rule
fn check_structure(document: Document, digits: &str) -> Result<(), DocumentError> {
    let expected = document.digit_count();
    if digits.len() != expected {
        return Err(DocumentError::Length {
            document,
            expected,
            found: digits.len(),
        });
    }

    let mut bytes = digits.bytes();
    if let Some(first) = bytes.next() {
        if bytes.all(|b| b == first) {
            return Err(DocumentError::IdenticalDigits(document));
        }
    }

    Ok(())
}

fn compute_pair(document: Document, base: &[u32]) -> [u32; 2] {
    match document {
        Document::Cpf => cpf_check_digits(base),
        Document::Cnpj => cnpj_check_digits(base),
    }
}

fn cpf_check_digits(base: &[u32]) -> [u32; 2] {
    const FIRST: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
    const SECOND: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

    let first = mod11_digit(base.iter().copied(), &FIRST);
    let second = mod11_digit(base.iter().copied().chain(iter::once(first)), &SECOND);
    [first, second]
}

fn cnpj_check_digits(base: &[u32]) -> [u32; 2] {
    const FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    let first = mod11_digit(base.iter().copied(), &FIRST);
    let second = mod11_digit(base.iter().copied().chain(iter::once(first)), &SECOND);
    [first, second]
}

/// Weighted sum modulo 11: remainders 0 and 1 map to 0, anything else to `11 - r`
fn mod11_digit(digits: impl Iterator<Item = u32>, weights: &[u32]) -> u32 {
    let sum: u32 = digits.zip(weights).map(|(digit, weight)| digit * weight).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
