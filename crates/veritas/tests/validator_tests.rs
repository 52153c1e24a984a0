/// Facade tests: sibling validators, field aggregation, the `Validate`
/// trait, URL probing and configuration.

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use url::Url;
use veritas::{
    NumberError, PhoneError, Reachability, UrlError, Validate, ValidationResult, Validator,
    ValidatorConfig, Value,
};
use veritas_types::{Cnpj, EmailAddress};

/// Probe that answers with a fixed status and counts calls
struct FakeProbe {
    status: u16,
    calls: Arc<AtomicUsize>,
}

impl Reachability for FakeProbe {
    fn check(&self, _url: &Url) -> Result<(), UrlError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.status {
            0 => Err(UrlError::Unreachable("connection refused".to_string())),
            200 => Ok(()),
            other => Err(UrlError::UnexpectedStatus(other)),
        }
    }
}

fn probed(status: u16) -> (Validator, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let probe = FakeProbe {
        status,
        calls: calls.clone(),
    };
    (Validator::new().with_probe(probe), calls)
}

// =============================================================================
// Sibling validators
// =============================================================================

#[rstest]
#[case("user@example.com", Ok(()))]
#[case("  User@Example.COM ", Ok(()))]
#[case("", Err("email cannot be empty"))]
#[case("invalid-email", Err("invalid email format"))]
#[case("user@domain", Err("invalid email format"))]
fn email_cases(#[case] email: &str, #[case] expected: Result<(), &str>) {
    let result = Validator::new().email(&Value::from(email)).map_err(|e| e.to_string());
    assert_eq!(result, expected.map_err(str::to_string));
}

#[rstest]
#[case("+55 (41) 99504-8710", Ok(()))]
#[case("(41) 3346-4468", Ok(()))]
#[case("   ", Err(PhoneError::Empty))]
#[case("+55 00 99504-8710", Err(PhoneError::InvalidAreaCode))]
#[case("+55 41 89504-8710", Err(PhoneError::MissingMobilePrefix))]
#[case("+56 41 99504-8710", Err(PhoneError::InvalidFormat))]
fn phone_cases(#[case] phone: &str, #[case] expected: Result<(), PhoneError>) {
    assert_eq!(Validator::new().phone(&Value::from(phone)), expected);
}

#[test]
fn phone_rejects_non_text() {
    let v = Validator::new();
    assert_eq!(v.phone(&Value::from(5541995048710_i64)), Err(PhoneError::NotAString));
    assert_eq!(
        v.phone(&Value::from(vec!["+55", "41", "99504-8710"])),
        Err(PhoneError::NotAString)
    );
}

#[rstest]
#[case("hello", 3, 10, Ok(()))]
#[case("hi", 3, 10, Err("string must be at least 3 characters long"))]
#[case("verylongstring", 3, 10, Err("string must be at most 10 characters long"))]
#[case("ação", 4, 4, Ok(()))]
fn string_cases(
    #[case] s: &str,
    #[case] min: usize,
    #[case] max: usize,
    #[case] expected: Result<(), &str>,
) {
    let result = Validator::new()
        .string(&Value::from(s), min, max)
        .map_err(|e| e.to_string());
    assert_eq!(result, expected.map_err(str::to_string));
}

#[test]
fn number_checks_accept_numbers_and_text() {
    let v = Validator::new();

    assert!(v.is_number(&Value::from("  42 ")).is_ok());
    assert!(v.is_positive(&Value::from(5)).is_ok());
    assert!(v.is_negative(&Value::from("-0.5")).is_ok());
    assert!(v.is_even(&Value::from(10)).is_ok());
    assert!(v.bigger_than(&Value::from(10), 5.0).is_ok());
    assert!(v.smaller_than(&Value::from("4"), 5.0).is_ok());
    assert!(v.between(&Value::from(5.5), 1.0, 10.0).is_ok());
    assert!(v.is_prime(&Value::from(13)).is_ok());

    assert_eq!(v.is_positive(&Value::from(0)), Err(NumberError::NotPositive));
    assert_eq!(v.is_even(&Value::from("7")), Err(NumberError::NotEven));
    assert_eq!(v.is_prime(&Value::from(15)), Err(NumberError::NotPrime));
    assert_eq!(v.is_number(&Value::from("")), Err(NumberError::Empty));
    assert_eq!(
        v.is_number(&Value::from(vec![1, 2])),
        Err(NumberError::UnsupportedType("array"))
    );
}

// =============================================================================
// URL validation and probing
// =============================================================================

#[test]
fn url_format_errors_skip_the_probe() {
    let (v, calls) = probed(200);

    assert_eq!(v.url(&Value::from("")), Err(UrlError::Empty));
    assert_eq!(v.url(&Value::from("example.com")), Err(UrlError::MissingScheme));
    assert_eq!(v.url(&Value::from("http://")), Err(UrlError::MissingHost));
    assert_eq!(v.url(&Value::from(80)), Err(UrlError::NotAString));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[case(200, Ok(()))]
#[case(404, Err("URL returned status 404, expected 200"))]
#[case(301, Err("URL returned status 301, expected 200"))]
#[case(0, Err("URL is not accessible: connection refused"))]
fn url_probe_outcomes(#[case] status: u16, #[case] expected: Result<(), &str>) {
    let (v, calls) = probed(status);

    let result = v
        .url(&Value::from("https://example.com"))
        .map_err(|e| e.to_string());
    assert_eq!(result, expected.map_err(str::to_string));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Aggregation
// =============================================================================

#[test]
fn validate_multiple_keeps_every_failure_in_order() {
    let v = Validator::new();
    let cnpj = Value::from("11.222.333/0001-91");
    let email = Value::from("invalid-email");
    let name = Value::from("Acme");
    let age = Value::from(-3);

    let result = v.validate_multiple([
        v.validate("cnpj", &cnpj, |x| v.cnpj(x)),
        v.validate("email", &email, |x| v.email(x)),
        v.validate("name", &name, |x| v.string(x, 2, 50)),
        v.validate("age", &age, |x| v.is_positive(x)),
    ]);

    assert!(result.has_errors());
    let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["cnpj", "email", "age"]);

    let cnpj_error = result.get_error("cnpj").unwrap();
    assert_eq!(cnpj_error.message, "invalid CNPJ check digits");
    assert_eq!(cnpj_error.value, cnpj);

    assert!(v.has_errors(result.errors()));
    assert!(!v.has_errors(&[]));
}

#[test]
fn validate_multiple_with_no_failures() {
    let v = Validator::new();
    let cpf = Value::from("123.456.789-09");
    let phone = Value::from("+55 41 3346-4468");

    let result = v.validate_multiple([
        v.validate("cpf", &cpf, |x| v.cpf(x)),
        v.validate("phone", &phone, |x| v.phone(x)),
    ]);

    assert!(result.is_valid());
    assert_eq!(result, ValidationResult::success());
}

/// Registration form with raw, unchecked input
struct CompanySignup {
    cnpj: Value,
    email: Value,
    phone: Value,
    website: Value,
}

impl Validate for CompanySignup {
    fn validate(&self, v: &Validator) -> ValidationResult {
        v.validate_multiple([
            v.validate("cnpj", &self.cnpj, |x| v.cnpj(x)),
            v.validate("email", &self.email, |x| v.email(x)),
            v.validate("phone", &self.phone, |x| v.phone(x)),
            v.validate("website", &self.website, |x| v.url(x)),
        ])
    }
}

#[test]
fn validate_trait_on_a_form() {
    let v = Validator::new();

    let good = CompanySignup {
        cnpj: Value::from("11.222.333/0001-81"),
        email: Value::from("contato@empresa.com.br"),
        phone: Value::from("+55 (11) 98765-4321"),
        website: Value::from("https://empresa.com.br"),
    };
    assert!(good.validate(&v).is_valid());

    let bad = CompanySignup {
        cnpj: Value::from(11222333000181_i64),
        email: Value::Null,
        phone: Value::from("+55 41 123"),
        website: Value::from("empresa.com.br"),
    };
    let messages = bad.validate(&v).messages_by_field();
    assert_eq!(messages["cnpj"], vec!["CNPJ must be a string"]);
    assert_eq!(messages["email"], vec!["email must be a string"]);
    assert_eq!(messages["phone"], vec!["invalid Brazilian phone number format"]);
    assert_eq!(
        messages["website"],
        vec!["URL must include a scheme (http:// or https://)"]
    );
}

// =============================================================================
// Typed values
// =============================================================================

#[test]
fn typed_values_agree_with_facade() {
    let v = Validator::new();

    for raw in ["11.222.333/0001-81", "11.222.333/0001-91", "00.000.000/0000-00", "123"] {
        let facade = v.cnpj(&Value::from(raw));
        let typed = Cnpj::try_new(raw.to_string()).map(|_| ());
        assert_eq!(facade, typed, "{raw}");
    }

    let email = EmailAddress::try_new(" Contato@Empresa.com.br ".to_string()).unwrap();
    assert!(v.email(&Value::from(email.as_str())).is_ok());
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn config_without_probe_accepts_well_formed_urls() {
    let config = ValidatorConfig::from_toml_str("[email]\nlowercase = false\n").unwrap();
    let v = Validator::with_config(config);

    assert!(!v.config().email.lowercase);
    assert!(v.url(&Value::from("https://example.invalid")).is_ok());
    assert!(v.email(&Value::from("Mixed.Case@Example.com")).is_ok());
}
