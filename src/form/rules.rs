//! Static validation rules for the contact form
//!
//! Every field owns an ordered list of rules. Rules are plain
//! predicate + message pairs; the first failing rule for a field becomes
//! that field's single active error.

use super::Field;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Minimum number of characters (Unicode scalar values) for the first name
pub const MIN_FIRST_NAME_CHARS: usize = 5;

/// Email shape: dot-separated local atoms, `@`, then at least two dot-separated domain labels
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

/// Category of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Field is empty
    Required,
    /// Field is present but violates a length or shape constraint
    Format,
}

/// A single active validation finding for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    /// Rendered form of the finding. Every rendered finding carries the
    /// `Error:` prefix so it can be located by a plain text search.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}

/// One constraint on one field
pub struct Rule {
    pub field: Field,
    pub kind: ErrorKind,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl Rule {
    /// Whether `value` satisfies this rule
    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }

    fn finding(&self) -> FieldError {
        FieldError {
            field: self.field,
            kind: self.kind,
            message: self.message,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

/// The complete rule table, in evaluation order.
///
/// `Field::Message` has no entry: the message is free text.
pub static RULES: &[Rule] = &[
    Rule {
        field: Field::FirstName,
        kind: ErrorKind::Required,
        message: "firstName is a required field.",
        check: is_present,
    },
    Rule {
        field: Field::FirstName,
        kind: ErrorKind::Format,
        message: "firstName must have at least 5 characters.",
        check: has_min_first_name_chars,
    },
    Rule {
        field: Field::LastName,
        kind: ErrorKind::Required,
        message: "lastName is a required field.",
        check: is_present,
    },
    Rule {
        field: Field::Email,
        kind: ErrorKind::Required,
        message: "email is a required field.",
        check: is_present,
    },
    Rule {
        field: Field::Email,
        kind: ErrorKind::Format,
        message: "email must be a valid email address.",
        check: is_email_shaped,
    },
];

/// Evaluate the rules of a single field against `value`.
///
/// Returns the first violated rule's finding, or `None` when the value
/// satisfies every rule of the field. Pure: no state, no side effects.
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find(|rule| !rule.passes(value))
        .map(Rule::finding)
}

/// Whether a field carries any constraint at all
pub fn is_constrained(field: Field) -> bool {
    RULES.iter().any(|rule| rule.field == field)
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn has_min_first_name_chars(value: &str) -> bool {
    value.chars().count() >= MIN_FIRST_NAME_CHARS
}

fn is_email_shaped(value: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
        .is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_first_name_reports_required_before_length() {
        let err = validate_field(Field::FirstName, "").unwrap();
        assert_eq!(err.kind, ErrorKind::Required);
        assert_eq!(err.message, "firstName is a required field.");
    }

    #[test]
    fn short_first_name_reports_length() {
        let err = validate_field(Field::FirstName, "John").unwrap();
        assert_eq!(err.kind, ErrorKind::Format);
        assert_eq!(err.message, "firstName must have at least 5 characters.");
        assert!(validate_field(Field::FirstName, "Johna").is_none());
    }

    #[test]
    fn first_name_length_counts_chars_not_bytes() {
        // 4 chars, 8 bytes
        assert!(validate_field(Field::FirstName, "Élaé").is_some());
        assert!(validate_field(Field::FirstName, "Zoë-A").is_none());
    }

    #[test]
    fn last_name_only_needs_to_be_present() {
        assert_eq!(
            validate_field(Field::LastName, "").unwrap().message,
            "lastName is a required field."
        );
        assert!(validate_field(Field::LastName, "X").is_none());
    }

    #[test]
    fn email_shape() {
        assert_eq!(
            validate_field(Field::Email, "").unwrap().message,
            "email is a required field."
        );
        for bad in [
            "test",
            "test@",
            "@test.com",
            "test@test",
            "a b@test.com",
            "test@test.",
            ".a@test.com",
            "a.@test.com",
            "a..b@test.com",
        ] {
            let err = validate_field(Field::Email, bad).unwrap();
            assert_eq!(err.kind, ErrorKind::Format, "{bad:?} should be malformed");
            assert_eq!(err.message, "email must be a valid email address.");
        }
        for good in ["test@test.com", "first.last+tag@mail.example.org", "x@a-b.io"] {
            assert!(validate_field(Field::Email, good).is_none(), "{good:?}");
        }
    }

    #[test]
    fn message_is_unconstrained() {
        assert!(!is_constrained(Field::Message));
        assert!(validate_field(Field::Message, "").is_none());
        assert!(is_constrained(Field::FirstName));
    }

    #[test]
    fn rendered_finding_carries_error_prefix() {
        let err = validate_field(Field::LastName, "").unwrap();
        assert_eq!(err.to_string(), "Error: lastName is a required field.");
    }
}
