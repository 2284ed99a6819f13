//! Submit-time validation rules for the contact form

use super::field::FieldName;
use super::form_state::{FieldErrors, FieldValues};
use regex::Regex;
use std::sync::LazyLock;

pub const REQUIRED: &str = "This field is required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const CONSENT_REQUIRED: &str = "To submit this form, please consent to being contacted";
pub const QUERY_REQUIRED: &str = "Please select a query type";

/// Pragmatic email shape check: local part of word characters with optional
/// single `.`/`-` separators, an `@`, the same shape for the domain, then at
/// least one `.xx`/`.xxx` suffix. Intentionally not RFC 5322.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("email pattern compiles")
});

/// Validate every field and collect all failures.
///
/// Pure function over the current values: the returned mapping contains a key
/// for each failing field and nothing else. Rules never short-circuit across
/// fields, so one bad field does not hide another.
pub fn validate(values: &FieldValues) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if values.first_name.is_empty() {
        errors.insert(FieldName::FirstName, REQUIRED.to_string());
    }
    if values.last_name.is_empty() {
        errors.insert(FieldName::LastName, REQUIRED.to_string());
    }
    if values.message.is_empty() {
        errors.insert(FieldName::Message, REQUIRED.to_string());
    }
    if values.email.is_empty() {
        errors.insert(FieldName::Email, REQUIRED.to_string());
    } else if !EMAIL_RE.is_match(&values.email) {
        errors.insert(FieldName::Email, INVALID_EMAIL.to_string());
    }
    if !values.consent {
        errors.insert(FieldName::Consent, CONSENT_REQUIRED.to_string());
    }
    if values.query.is_empty() {
        errors.insert(FieldName::Query, QUERY_REQUIRED.to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Values that pass every rule
    fn valid_values() -> FieldValues {
        FieldValues {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.co".to_string(),
            query: "General Enquiry".to_string(),
            message: "hi".to_string(),
            consent: true,
        }
    }

    mod aggregate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_values_produce_no_errors() {
            let errors = validate(&valid_values());
            assert!(errors.is_empty());
        }

        #[test]
        fn test_defaults_fail_every_field() {
            let errors = validate(&FieldValues::default());
            assert_eq!(errors.len(), 6);
            assert_eq!(errors[&FieldName::FirstName], REQUIRED);
            assert_eq!(errors[&FieldName::LastName], REQUIRED);
            assert_eq!(errors[&FieldName::Email], REQUIRED);
            assert_eq!(errors[&FieldName::Message], REQUIRED);
            assert_eq!(errors[&FieldName::Consent], CONSENT_REQUIRED);
            assert_eq!(errors[&FieldName::Query], QUERY_REQUIRED);
        }

        #[test]
        fn test_one_bad_field_does_not_hide_another() {
            let values = FieldValues {
                first_name: String::new(),
                consent: false,
                ..valid_values()
            };
            let errors = validate(&values);
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[&FieldName::FirstName], REQUIRED);
            assert_eq!(errors[&FieldName::Consent], CONSENT_REQUIRED);
        }

        #[test]
        fn test_validate_is_idempotent() {
            let values = FieldValues {
                email: "not-an-email".to_string(),
                ..FieldValues::default()
            };
            assert_eq!(validate(&values), validate(&values));
        }
    }

    mod email_rule {
        use super::*;
        use pretty_assertions::assert_eq;

        fn email_error(email: &str) -> Option<String> {
            let values = FieldValues {
                email: email.to_string(),
                ..valid_values()
            };
            validate(&values).remove(&FieldName::Email)
        }

        #[test]
        fn test_empty_email_is_required_not_invalid() {
            assert_eq!(email_error(""), Some(REQUIRED.to_string()));
        }

        #[test]
        fn test_missing_tld_is_invalid() {
            assert_eq!(email_error("a@b"), Some(INVALID_EMAIL.to_string()));
        }

        #[test]
        fn test_dotted_and_dashed_parts_are_accepted() {
            assert_eq!(email_error("a.b-c@d.ef"), None);
        }

        #[test]
        fn test_plain_address_is_accepted() {
            assert_eq!(email_error("ada@x.com"), None);
        }

        #[test]
        fn test_multiple_domain_suffixes_are_accepted() {
            assert_eq!(email_error("user@mail.example.co.uk"), None);
        }

        #[test]
        fn test_long_tld_is_rejected() {
            // The suffix groups only admit 2-3 word characters
            assert_eq!(email_error("a@b.info"), Some(INVALID_EMAIL.to_string()));
        }

        #[test]
        fn test_consecutive_separators_are_rejected() {
            assert_eq!(email_error("a..b@c.de"), Some(INVALID_EMAIL.to_string()));
        }

        #[test]
        fn test_missing_local_part_is_rejected() {
            assert_eq!(email_error("@b.co"), Some(INVALID_EMAIL.to_string()));
        }

        #[test]
        fn test_trailing_garbage_is_rejected() {
            assert_eq!(email_error("a@b.co "), Some(INVALID_EMAIL.to_string()));
        }
    }

    mod query_rule {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_query_is_an_error() {
            let values = FieldValues {
                query: String::new(),
                ..valid_values()
            };
            let errors = validate(&values);
            assert_eq!(errors[&FieldName::Query], QUERY_REQUIRED);
        }

        #[test]
        fn test_both_query_options_pass() {
            for query in ["General Enquiry", "Support Request"] {
                let values = FieldValues {
                    query: query.to_string(),
                    ..valid_values()
                };
                assert!(validate(&values).is_empty(), "{query} should be valid");
            }
        }
    }

    mod consent_rule {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_unchecked_consent_is_an_error() {
            let values = FieldValues {
                consent: false,
                ..valid_values()
            };
            let errors = validate(&values);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[&FieldName::Consent], CONSENT_REQUIRED);
        }
    }
}
