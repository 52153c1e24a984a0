//! Validated newtypes for Brazilian documents and contact data
//!
//! Each type runs the matching `veritas-validation` check at construction
//! time, so holding a `Cpf` means holding a CPF with valid check digits.
//! Construction errors are the validator's own error enums, so messages
//! match the plain functions exactly.
//!
//! Values are stored in canonical form:
//! - `Cpf` / `Cnpj` keep digits only (`"111.444.777-35"` → `"11144477735"`)
//! - `EmailAddress` is trimmed with ASCII letters lowercased
//! - `BrazilianPhone` has separators removed (`"+55 (41) 99504-8710"` → `"+5541995048710"`)
//!
//! # Example
//!
//! ```rust,ignore
//! use veritas_types::Cpf;
//!
//! let cpf = Cpf::try_new("111.444.777-35".to_string())?;  // ✓
//! assert_eq!(cpf.as_str(), "11144477735");
//!
//! let bad = Cpf::try_new("111.444.777-45".to_string());   // ✗ invalid CPF check digits
//! ```

use nutype::nutype;
use veritas_validation::{
    classify_phone, clean_phone, normalize_digits, normalize_email, validate_cnpj, validate_cpf,
    validate_email, validate_phone, Document, DocumentError, EmailError, PhoneError, PhoneKind,
};

// =============================================================================
// Brazilian Tax Identifiers
// =============================================================================

/// CPF (individual taxpayer identifier), stored as its 11 digits
#[nutype(
    sanitize(with = digits_only),
    validate(with = validate_cpf, error = DocumentError),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Cpf(String);

/// CNPJ (organizational taxpayer identifier), stored as its 14 digits
#[nutype(
    sanitize(with = digits_only),
    validate(with = validate_cnpj, error = DocumentError),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Cnpj(String);

impl Cpf {
    pub fn as_str(&self) -> &str {
        self
    }

    /// The 9 digits before the check digits
    pub fn base(&self) -> &str {
        split_check_digits(self, Document::Cpf).0
    }

    /// The two trailing check digits
    pub fn check_digits(&self) -> &str {
        split_check_digits(self, Document::Cpf).1
    }
}

impl Cnpj {
    pub fn as_str(&self) -> &str {
        self
    }

    /// The 12 digits before the check digits
    pub fn base(&self) -> &str {
        split_check_digits(self, Document::Cnpj).0
    }

    /// The two trailing check digits
    pub fn check_digits(&self) -> &str {
        split_check_digits(self, Document::Cnpj).1
    }

    /// The 8-digit root shared by every branch of the same organization
    pub fn root(&self) -> &str {
        self.base().get(..8).unwrap_or_default()
    }

    /// The 4-digit branch number (`0001` is the headquarters)
    pub fn branch(&self) -> &str {
        self.base().get(8..).unwrap_or_default()
    }
}

fn digits_only(raw: String) -> String {
    normalize_digits(&raw)
}

fn split_check_digits(digits: &str, document: Document) -> (&str, &str) {
    if digits.len() < document.base_len() {
        return (digits, "");
    }
    digits.split_at(document.base_len())
}

// =============================================================================
// Contact Data
// =============================================================================

/// Email address, trimmed with ASCII letters lowercased
#[nutype(
    sanitize(with = normalized_email),
    validate(with = validate_email, error = EmailError),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self
    }

    /// Everything after the `@`
    pub fn domain(&self) -> &str {
        self.as_str().rsplit_once('@').map(|(_, domain)| domain).unwrap_or_default()
    }
}

/// Brazilian phone number with separators removed
#[nutype(
    sanitize(with = separators_removed),
    validate(with = validate_phone, error = PhoneError),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct BrazilianPhone(String);

impl BrazilianPhone {
    pub fn as_str(&self) -> &str {
        self
    }

    /// Mobile or landline, as decided during validation
    pub fn kind(&self) -> PhoneKind {
        // Already validated, so classification cannot fail
        classify_phone(self).unwrap_or(PhoneKind::Landline)
    }

    /// Two-digit area code
    pub fn ddd(&self) -> &str {
        let national = self.as_str().strip_prefix("+55").unwrap_or(self.as_str());
        national.get(..2).unwrap_or_default()
    }
}

fn normalized_email(raw: String) -> String {
    normalize_email(&raw)
}

fn separators_removed(raw: String) -> String {
    clean_phone(&raw)
}
