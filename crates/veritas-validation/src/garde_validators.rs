//! Custom garde validators for Brazilian documents and phone numbers
//!
//! These wrap the plain validators so they can be used as garde field
//! rules. The garde error carries the same message as the plain error.

/// Validator: CPF with valid check digits
///
/// # Example
///
/// ```ignore
/// use garde::Validate;
///
/// #[derive(Validate)]
/// struct SignupForm {
///     #[garde(custom(cpf))]
///     tax_id: String,
/// }
/// ```
pub fn cpf(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    crate::validate_cpf(value).map_err(|err| garde::Error::new(err.to_string()))
}

/// Validator: CNPJ with valid check digits
pub fn cnpj(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    crate::validate_cnpj(value).map_err(|err| garde::Error::new(err.to_string()))
}

/// Validator: CPF or CNPJ, picked by digit count
///
/// Useful for fields that accept either an individual or an organization.
/// Anything that is neither 11 nor 14 digits is reported against CPF.
pub fn cpf_or_cnpj(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    let document = if crate::normalize_digits(value).len() == crate::Document::Cnpj.digit_count() {
        crate::Document::Cnpj
    } else {
        crate::Document::Cpf
    };

    crate::validate_document(document, value).map_err(|err| garde::Error::new(err.to_string()))
}

/// Validator: Brazilian phone number, mobile or landline
pub fn brazilian_phone(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    crate::validate_phone(value).map_err(|err| garde::Error::new(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf() {
        assert!(cpf("111.444.777-35", &()).is_ok());

        let err = cpf("111.444.777-45", &()).unwrap_err();
        assert_eq!(err.to_string(), "invalid CPF check digits");
    }

    #[test]
    fn test_cnpj() {
        assert!(cnpj("11.222.333/0001-81", &()).is_ok());

        let err = cnpj("00.000.000/0000-00", &()).unwrap_err();
        assert_eq!(err.to_string(), "CNPJ cannot be a sequence of identical digits");
    }

    #[test]
    fn test_cpf_or_cnpj() {
        assert!(cpf_or_cnpj("123.456.789-09", &()).is_ok());
        assert!(cpf_or_cnpj("12.345.678/0001-95", &()).is_ok());

        let err = cpf_or_cnpj("1234", &()).unwrap_err();
        assert_eq!(err.to_string(), "CPF must have exactly 11 digits");
    }

    #[test]
    fn test_brazilian_phone() {
        assert!(brazilian_phone("+55 (41) 99504-8710", &()).is_ok());
        assert!(brazilian_phone("+55 00 99504-8710", &()).is_err());
    }
}
