//! # Field Validation
//!
//! Pure validation rules for the contact form. Each field validates
//! independently; the reducer records the resulting [`FieldStatus`] per
//! field, and the form component renders the error text inline.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` with no whitespace and no extra `@` — intentionally
/// loose, the same shape check the page performs client-side.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;

/// The three contact form fields, in focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }
}

/// Validation state of a single field.
///
/// `Pristine` means the field has never been validated (never blurred,
/// never part of a submit) and renders without success or error styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Pristine,
    Valid,
    Invalid(&'static str),
}

impl FieldStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    pub fn error(self) -> Option<&'static str> {
        match self {
            FieldStatus::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Validate one field's current value.
pub fn validate(field: FormField, value: &str) -> FieldStatus {
    match field {
        FormField::Name => {
            if value.trim().chars().count() >= MIN_NAME_LEN {
                FieldStatus::Valid
            } else {
                FieldStatus::Invalid("Name must be at least 2 characters long")
            }
        }
        FormField::Email => {
            if EMAIL_RE.is_match(value.trim()) {
                FieldStatus::Valid
            } else {
                FieldStatus::Invalid("Please enter a valid email address")
            }
        }
        FormField::Message => {
            if value.trim().chars().count() >= MIN_MESSAGE_LEN {
                FieldStatus::Valid
            } else {
                FieldStatus::Invalid("Message must be at least 10 characters long")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_boundary() {
        assert!(!validate(FormField::Name, "a").is_valid());
        assert!(validate(FormField::Name, "ab").is_valid());
        // Whitespace padding doesn't count toward the minimum
        assert!(!validate(FormField::Name, "  a  ").is_valid());
        assert!(validate(FormField::Name, "  ab  ").is_valid());
    }

    #[test]
    fn test_name_counts_chars_not_bytes() {
        assert!(validate(FormField::Name, "Æø").is_valid());
    }

    #[test]
    fn test_email_accepts_plain_addresses() {
        for ok in ["a@b.co", "first.last@example.com", "x+tag@sub.domain.org"] {
            assert!(validate(FormField::Email, ok).is_valid(), "{ok}");
        }
    }

    #[test]
    fn test_email_rejects_malformed() {
        for bad in ["", "plain", "no-at.example.com", "a@b", "a b@c.d", "a@@b.c"] {
            assert!(!validate(FormField::Email, bad).is_valid(), "{bad}");
        }
    }

    #[test]
    fn test_message_boundary() {
        assert!(!validate(FormField::Message, "123456789").is_valid());
        assert!(validate(FormField::Message, "1234567890").is_valid());
        assert!(!validate(FormField::Message, "   short   ").is_valid());
    }

    #[test]
    fn test_error_messages_match_page_copy() {
        assert_eq!(
            validate(FormField::Name, "").error(),
            Some("Name must be at least 2 characters long")
        );
        assert_eq!(
            validate(FormField::Email, "nope").error(),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate(FormField::Message, "hi").error(),
            Some("Message must be at least 10 characters long")
        );
    }

    #[test]
    fn test_field_focus_order_cycles() {
        let mut f = FormField::Name;
        for _ in 0..FormField::ALL.len() {
            f = f.next();
        }
        assert_eq!(f, FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }
}
