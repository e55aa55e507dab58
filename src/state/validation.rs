//! Field validation for the contact form
//!
//! Every rule is checked on each pass, so a single call reports all
//! failing fields at once.

use super::forms::{FieldName, FormInput};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const NAME_ERROR: &str = "Name must be at least 2 characters";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const PHONE_ERROR: &str = "Please enter a valid phone number";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters";

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// `\d` is Unicode-aware in the regex crate, so digits are spelled out.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{10,}$").expect("phone pattern is valid"));

/// Field-level error messages, keyed by field.
///
/// Only failing fields are present; an empty set means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Drop the error for one field without revalidating the rest.
    /// Returns true if an error was present.
    pub fn clear_field(&mut self, field: FieldName) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Validate all four fields of a contact form submission
pub fn validate(input: &FormInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if input.name.chars().count() < MIN_NAME_CHARS {
        errors.insert(FieldName::Name, NAME_ERROR);
    }

    if !EMAIL_PATTERN.is_match(&input.email) {
        errors.insert(FieldName::Email, EMAIL_ERROR);
    }

    if !input.phone.is_empty() && !PHONE_PATTERN.is_match(&input.phone) {
        errors.insert(FieldName::Phone, PHONE_ERROR);
    }

    if input.message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(FieldName::Message, MESSAGE_ERROR);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(name: &str, email: &str, phone: &str, message: &str) -> FormInput {
        FormInput {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    fn valid() -> FormInput {
        input("Jo", "a@b.com", "", "Hello there!")
    }

    fn only(field: FieldName, message: &str) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        errors.insert(field, message);
        errors
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn test_valid_input_with_phone() {
        let form = FormInput {
            phone: "+91 98765 43210".to_string(),
            ..valid()
        };
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_all_fields_invalid() {
        let errors = validate(&input("J", "bad", "123", "short"));
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FieldName::Name), Some(NAME_ERROR));
        assert_eq!(errors.get(FieldName::Email), Some(EMAIL_ERROR));
        assert_eq!(errors.get(FieldName::Phone), Some(PHONE_ERROR));
        assert_eq!(errors.get(FieldName::Message), Some(MESSAGE_ERROR));
    }

    #[test]
    fn test_empty_input_skips_phone() {
        let errors = validate(&FormInput::default());
        assert_eq!(errors.len(), 3);
        assert!(!errors.contains(FieldName::Phone));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let form = input("J", "a@b", "12", "hi");
        assert_eq!(validate(&form), validate(&form));
    }

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_single_char_rejected() {
            let form = FormInput {
                name: "J".to_string(),
                ..valid()
            };
            assert_eq!(validate(&form), only(FieldName::Name, NAME_ERROR));
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            let form = FormInput {
                name: "é".to_string(),
                ..valid()
            };
            assert_eq!(validate(&form), only(FieldName::Name, NAME_ERROR));

            let form = FormInput {
                name: "Zoë".to_string(),
                ..valid()
            };
            assert!(validate(&form).is_empty());
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        fn check(email: &str) -> bool {
            let form = FormInput {
                email: email.to_string(),
                ..valid()
            };
            validate(&form).is_empty()
        }

        #[test]
        fn test_accepts_common_shapes() {
            assert!(check("a@b.com"));
            assert!(check("first.last@example.co.uk"));
            assert!(check("a@b.c.d"));
        }

        #[test]
        fn test_rejects_malformed() {
            assert!(!check(""));
            assert!(!check("bad"));
            assert!(!check("a@b"));
            assert!(!check("@b.com"));
            assert!(!check("a@.com"));
            assert!(!check("a@b."));
            assert!(!check("a@@b.com"));
            assert!(!check("a@b@c.com"));
            assert!(!check("a b@c.com"));
            assert!(!check("a@b .com"));
        }

        #[test]
        fn test_only_email_error_reported() {
            let form = FormInput {
                email: "bad".to_string(),
                ..valid()
            };
            assert_eq!(validate(&form), only(FieldName::Email, EMAIL_ERROR));
        }
    }

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;

        fn check(phone: &str) -> bool {
            let form = FormInput {
                phone: phone.to_string(),
                ..valid()
            };
            validate(&form).is_empty()
        }

        #[test]
        fn test_empty_phone_is_valid() {
            assert!(check(""));
        }

        #[test]
        fn test_accepts_digits_spaces_and_hyphens() {
            assert!(check("0123456789"));
            assert!(check("+1 555-123-4567"));
            assert!(check("+91 98765 43210"));
            assert!(check("----------"));
        }

        #[test]
        fn test_rejects_short_or_foreign_chars() {
            assert!(!check("123"));
            assert!(!check("123456789"));
            assert!(!check("+123456789"));
            assert!(!check("(555) 123-4567"));
            assert!(!check("555.123.4567"));
            assert!(!check("12345 67890x"));
            assert!(!check("++1234567890"));
        }

        #[test]
        fn test_rejects_non_ascii_digits() {
            assert!(!check("١٢٣٤٥٦٧٨٩٠"));
        }

        #[test]
        fn test_only_phone_error_reported() {
            let form = FormInput {
                phone: "123".to_string(),
                ..valid()
            };
            assert_eq!(validate(&form), only(FieldName::Phone, PHONE_ERROR));
        }
    }

    mod message {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_exactly_ten_chars_is_valid() {
            let form = FormInput {
                message: "0123456789".to_string(),
                ..valid()
            };
            assert!(validate(&form).is_empty());
        }

        #[test]
        fn test_nine_chars_is_invalid() {
            let form = FormInput {
                message: "012345678".to_string(),
                ..valid()
            };
            assert_eq!(validate(&form), only(FieldName::Message, MESSAGE_ERROR));
        }
    }

    mod errors_map {
        use super::*;

        #[test]
        fn test_clear_field_leaves_others() {
            let mut errors = validate(&input("J", "bad", "", "short"));
            assert!(errors.clear_field(FieldName::Email));
            assert!(!errors.contains(FieldName::Email));
            assert!(errors.contains(FieldName::Name));
            assert!(errors.contains(FieldName::Message));
        }

        #[test]
        fn test_clear_field_without_error() {
            let mut errors = ValidationErrors::default();
            assert!(!errors.clear_field(FieldName::Phone));
        }
    }
}
