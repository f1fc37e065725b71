//! Per-field rules and their error messages

use crate::state::ContactField;
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_ERROR: &str = "Name must be at least 2 characters long";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const PHONE_ERROR: &str = "Please enter a valid phone number";
pub const SERVICE_ERROR: &str = "Please select a service";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters long";

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));

/// Check one field's value. Returns the error message when the rule fails.
pub fn check(field: ContactField, value: &str) -> Option<&'static str> {
    let ok = match field {
        ContactField::Name => trimmed_len(value) >= NAME_MIN_CHARS,
        ContactField::Email => EMAIL_PATTERN.is_match(value),
        ContactField::Phone => value.is_empty() || PHONE_PATTERN.is_match(&strip_phone(value)),
        ContactField::Service => !value.is_empty(),
        ContactField::Message => trimmed_len(value) >= MESSAGE_MIN_CHARS,
    };
    if ok {
        None
    } else {
        Some(message(field))
    }
}

pub fn message(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => NAME_ERROR,
        ContactField::Email => EMAIL_ERROR,
        ContactField::Phone => PHONE_ERROR,
        ContactField::Service => SERVICE_ERROR,
        ContactField::Message => MESSAGE_ERROR,
    }
}

/// Length in UTF-16 code units once whitespace and byte-order marks are
/// stripped from both ends
fn trimmed_len(value: &str) -> usize {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .encode_utf16()
        .count()
}

/// Drop whitespace, hyphens and parentheses before matching a phone number
fn strip_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}
