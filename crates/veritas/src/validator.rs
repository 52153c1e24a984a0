// File: src/validator.rs
// Purpose: Validator facade, field errors and multi-field results

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use veritas_validation::{
    self as core, Document, DocumentError, EmailError, NumberError, PhoneError, StringError,
    UrlError,
};

use crate::config::ValidatorConfig;
use crate::reachability::Reachability;
use crate::value::Value;

/// Category of a field failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[default]
    Invalid,
    Required,
    TooShort,
    TooLong,
}

/// A failed check on one named field
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
    /// The value as it was handed in, before any cleaning
    pub value: Value,
}

impl ValidationError {
    /// New error of kind [`ErrorKind::Invalid`]
    pub fn new(field: impl Into<String>, message: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            kind: ErrorKind::Invalid,
            message: message.into(),
            value,
        }
    }

    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Trait for types that can be validated field by field
pub trait Validate {
    /// Runs every field check and reports all failures
    fn validate(&self, validator: &Validator) -> ValidationResult;
}

/// Result of validation with errors
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self::default()
    }

    /// Collects the failures out of a set of field checks, keeping their order
    pub fn from_results(results: impl IntoIterator<Item = Result<(), ValidationError>>) -> Self {
        Self {
            errors: results.into_iter().filter_map(Result::err).collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Get first error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Get all errors for a specific field
    pub fn get_errors<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Field name to messages, the shape form renderers expect
    pub fn messages_by_field(&self) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            map.entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        map
    }

    /// Convert into a plain Result
    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Entry point for every validator
///
/// Each method accepts a [`Value`] of any shape and applies the type guard
/// before delegating to the pure validators in `veritas-validation`. The
/// validator holds no per-call state, so one instance can be shared.
pub struct Validator {
    config: ValidatorConfig,
    probe: Option<Box<dyn Reachability>>,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("config", &self.config)
            .field("probe", &self.probe.is_some())
            .finish()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Builds a validator from configuration
    ///
    /// The HTTP probe is installed only when `url.check_reachability` is set
    /// and the `reachability` feature is enabled.
    pub fn with_config(config: ValidatorConfig) -> Self {
        let probe = default_probe(&config);
        Self { config, probe }
    }

    /// Replaces the URL reachability probe
    pub fn with_probe(mut self, probe: impl Reachability + 'static) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Brazilian documents
    // -------------------------------------------------------------------------

    pub fn cpf(&self, value: &Value) -> Result<(), DocumentError> {
        self.document(Document::Cpf, value)
    }

    pub fn cnpj(&self, value: &Value) -> Result<(), DocumentError> {
        self.document(Document::Cnpj, value)
    }

    fn document(&self, document: Document, value: &Value) -> Result<(), DocumentError> {
        let text = value
            .as_str()
            .ok_or(DocumentError::NotAString(document))?;
        core::validate_document(document, text)
    }

    // -------------------------------------------------------------------------
    // Contact data and URLs
    // -------------------------------------------------------------------------

    pub fn email(&self, value: &Value) -> Result<(), EmailError> {
        let text = value.as_str().ok_or(EmailError::NotAString)?;
        core::validate_email_with(text, self.config.email.lowercase)
    }

    pub fn phone(&self, value: &Value) -> Result<(), PhoneError> {
        let text = value.as_str().ok_or(PhoneError::NotAString)?;
        core::validate_phone(text)
    }

    /// Format check, then the reachability probe when one is installed
    pub fn url(&self, value: &Value) -> Result<(), UrlError> {
        let text = value.as_str().ok_or(UrlError::NotAString)?;
        let parsed = core::validate_url(text)?;

        match &self.probe {
            Some(probe) => probe.check(&parsed),
            None => Ok(()),
        }
    }

    /// Length in characters, inclusive bounds
    pub fn string(&self, value: &Value, min: usize, max: usize) -> Result<(), StringError> {
        let text = value.as_str().ok_or(StringError::NotAString)?;
        core::validate_length(text, min, max)
    }

    // -------------------------------------------------------------------------
    // Numbers
    // -------------------------------------------------------------------------

    /// Accepts numbers and numeric text
    pub fn parse_number(&self, value: &Value) -> Result<f64, NumberError> {
        match value {
            Value::Number(n) => Ok(*n),
            Value::String(s) => core::parse_number(s),
            other => Err(NumberError::UnsupportedType(other.type_name())),
        }
    }

    pub fn is_number(&self, value: &Value) -> Result<(), NumberError> {
        self.parse_number(value).map(|_| ())
    }

    pub fn is_positive(&self, value: &Value) -> Result<(), NumberError> {
        core::validate_positive(self.parse_number(value)?)
    }

    pub fn is_negative(&self, value: &Value) -> Result<(), NumberError> {
        core::validate_negative(self.parse_number(value)?)
    }

    pub fn is_even(&self, value: &Value) -> Result<(), NumberError> {
        core::validate_even(self.parse_number(value)?)
    }

    pub fn bigger_than(&self, value: &Value, than: f64) -> Result<(), NumberError> {
        core::validate_bigger_than(self.parse_number(value)?, than)
    }

    pub fn smaller_than(&self, value: &Value, than: f64) -> Result<(), NumberError> {
        core::validate_smaller_than(self.parse_number(value)?, than)
    }

    pub fn between(&self, value: &Value, min: f64, max: f64) -> Result<(), NumberError> {
        core::validate_between(self.parse_number(value)?, min, max)
    }

    pub fn is_prime(&self, value: &Value) -> Result<(), NumberError> {
        core::validate_prime(self.parse_number(value)?)
    }

    // -------------------------------------------------------------------------
    // Field-level helpers
    // -------------------------------------------------------------------------

    /// Runs one check and attaches the field name to its failure
    ///
    /// ```rust,ignore
    /// let v = Validator::new();
    /// let value = Value::from("111.444.777-35");
    /// v.validate("cpf", &value, |x| v.cpf(x))?;
    /// ```
    pub fn validate<E, F>(&self, field: &str, value: &Value, check: F) -> Result<(), ValidationError>
    where
        E: fmt::Display,
        F: FnOnce(&Value) -> Result<(), E>,
    {
        check(value).map_err(|err| {
            tracing::debug!(field, error = %err, "field validation failed");
            ValidationError::new(field, err.to_string(), value.clone())
        })
    }

    /// Gathers every failure from a set of field checks
    pub fn validate_multiple(
        &self,
        results: impl IntoIterator<Item = Result<(), ValidationError>>,
    ) -> ValidationResult {
        ValidationResult::from_results(results)
    }

    pub fn has_errors(&self, errors: &[ValidationError]) -> bool {
        !errors.is_empty()
    }
}

#[cfg(feature = "reachability")]
fn default_probe(config: &ValidatorConfig) -> Option<Box<dyn Reachability>> {
    if config.url.check_reachability {
        let probe = crate::reachability::HttpProbe::new(config.url.timeout());
        Some(Box::new(probe))
    } else {
        None
    }
}

#[cfg(not(feature = "reachability"))]
fn default_probe(config: &ValidatorConfig) -> Option<Box<dyn Reachability>> {
    if config.url.check_reachability {
        tracing::warn!("url.check_reachability is set but the `reachability` feature is disabled");
    }
    None
}
