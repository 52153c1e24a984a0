//! Veritas Validation Core
//!
//! Pure Rust validation functions. Every validator takes text that has
//! already been narrowed to `&str` and returns a closed error enum whose
//! `Display` is the user-facing message.
//!
//! The Brazilian tax identifiers (CPF and CNPJ) live in [`document`]; the
//! remaining validators are independent siblings sharing only the cleaning
//! helpers in [`string`].

pub mod document;
pub mod email;
pub mod numeric;
pub mod phone;
pub mod string;
pub mod urls;

#[cfg(feature = "garde")]
pub mod garde_validators;

// Re-export all validators
pub use document::*;
pub use email::*;
pub use numeric::*;
pub use phone::*;
pub use string::*;
pub use urls::*;

#[cfg(feature = "garde")]
pub use garde_validators::*;
