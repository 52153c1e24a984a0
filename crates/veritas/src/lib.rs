//! # Veritas
//!
//! Input validation for Brazilian tax identifiers (CPF, CNPJ), email
//! addresses, Brazilian phone numbers, URLs, numbers and string lengths.
//!
//! Every check is a pure function. The [`Validator`] facade accepts values
//! of any shape ([`Value`]), rejects non-text input up front, and can
//! gather several field failures into one [`ValidationResult`].
//!
//! ## Example
//!
//! ```rust
//! use veritas::{Validator, Value};
//!
//! let v = Validator::new();
//!
//! assert!(v.cpf(&Value::from("111.444.777-35")).is_ok());
//! assert_eq!(
//!     v.cnpj(&Value::from(11222333000181_i64)).unwrap_err().to_string(),
//!     "CNPJ must be a string"
//! );
//!
//! let company = Value::from("11.222.333/0001-91");
//! let email = Value::from("contact@example");
//! let result = v.validate_multiple([
//!     v.validate("cnpj", &company, |x| v.cnpj(x)),
//!     v.validate("email", &email, |x| v.email(x)),
//! ]);
//! assert_eq!(result.errors().len(), 2);
//! ```

pub mod config;
pub mod reachability;
pub mod validator;
pub mod value;

pub use config::{EmailConfig, UrlConfig, ValidatorConfig};
pub use reachability::Reachability;
#[cfg(feature = "reachability")]
pub use reachability::HttpProbe;
pub use validator::{ErrorKind, Validate, ValidationError, ValidationResult, Validator};
pub use value::Value;

// Re-export the pure validators and their error types
pub use veritas_validation::{
    clean_string, is_blank, is_not_blank, matches_regex, normalize_digits, Document,
    DocumentError, EmailError, NumberError, PhoneError, PhoneKind, StringError, UrlError,
};
pub use veritas_validation as validation;
