use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::screening::fields::Field;

/// Accepted years of experience. Zero is allowed so entry-level candidates can apply.
pub const EXPERIENCE_YEARS: RangeInclusive<u32> = 0..=50;

const MIN_TEXT_LEN: usize = 2;
const PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

/// Outcome of checking one submitted value against its field's rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCheck {
    pub passed: bool,
    pub reason: Option<String>,
}

impl FieldCheck {
    fn pass() -> Self {
        Self {
            passed: true,
            reason: None,
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Runs the validator for `field` on an already-trimmed value.
pub fn validate_field(field: Field, value: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::fail("This field cannot be empty.");
    }

    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Phone => validate_phone(value),
        Field::Experience => validate_experience(value),
        Field::Position | Field::Location | Field::TechStack => validate_min_text(value),
    }
}

pub fn validate_name(value: &str) -> FieldCheck {
    if value.chars().count() < MIN_TEXT_LEN {
        return FieldCheck::fail("Please enter your full name (at least 2 characters).");
    }
    if !value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return FieldCheck::fail("Names may only contain letters and spaces.");
    }
    FieldCheck::pass()
}

pub fn validate_email(value: &str) -> FieldCheck {
    if EMAIL_PATTERN.is_match(value) {
        FieldCheck::pass()
    } else {
        FieldCheck::fail("Please enter a valid email (e.g., name@example.com).")
    }
}

pub fn validate_phone(value: &str) -> FieldCheck {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digits == PHONE_DIGITS {
        FieldCheck::pass()
    } else {
        FieldCheck::fail(format!(
            "Please enter a 10-digit phone number (found {digits} digits)."
        ))
    }
}

pub fn validate_experience(value: &str) -> FieldCheck {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return FieldCheck::fail("Please enter a whole number of years (e.g., 2, 5).");
    }

    let out_of_range = || {
        FieldCheck::fail(format!(
            "Please enter realistic years ({}-{}).",
            EXPERIENCE_YEARS.start(),
            EXPERIENCE_YEARS.end()
        ))
    };

    match value.parse::<u32>() {
        Ok(years) if EXPERIENCE_YEARS.contains(&years) => FieldCheck::pass(),
        _ => out_of_range(),
    }
}

pub fn validate_min_text(value: &str) -> FieldCheck {
    if value.chars().count() < MIN_TEXT_LEN {
        FieldCheck::fail("Please enter a valid response (at least 2 characters).")
    } else {
        FieldCheck::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_letters_and_spaces() {
        assert!(validate_name("Jane Doe").passed);
        assert!(validate_name("José Álvarez").passed);
    }

    #[test]
    fn test_name_rejects_digits_and_punctuation() {
        assert!(!validate_name("Jane2").passed);
        assert!(!validate_name("Jane-Doe").passed);
        assert!(!validate_name("O'Brien").passed);
    }

    #[test]
    fn test_name_rejects_single_letter() {
        let r = validate_name("J");
        assert!(!r.passed);
        assert!(r.reason.unwrap().contains("at least 2"));
    }

    #[test]
    fn test_email_accepts_common_forms() {
        assert!(validate_email("jane@example.com").passed);
        assert!(validate_email("jane.doe+jobs@mail.example.co.uk").passed);
        assert!(validate_email("j_d%1@sub-domain.io").passed);
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!validate_email("jane@example").passed);
        assert!(!validate_email("jane.example.com").passed);
        assert!(!validate_email("jane@example.c").passed);
        assert!(!validate_email("jane@example.c0m").passed);
        assert!(!validate_email("jane doe@example.com").passed);
    }

    #[test]
    fn test_phone_counts_digits_only() {
        assert!(validate_phone("1234567890").passed);
        assert!(validate_phone("(123) 456-7890").passed);
        assert!(validate_phone("123.456.7890").passed);
    }

    #[test]
    fn test_phone_rejects_wrong_length() {
        let r = validate_phone("12345");
        assert!(!r.passed);
        assert!(r.reason.unwrap().contains("found 5"));
        assert!(!validate_phone("+1 123 456 7890").passed);
        assert!(!validate_phone("call me").passed);
    }

    #[test]
    fn test_experience_bounds_inclusive() {
        assert!(validate_experience("0").passed);
        assert!(validate_experience("5").passed);
        assert!(validate_experience("50").passed);
        assert!(!validate_experience("51").passed);
    }

    #[test]
    fn test_experience_rejects_non_numeric() {
        assert!(!validate_experience("five").passed);
        assert!(!validate_experience("-1").passed);
        assert!(!validate_experience("2.5").passed);
        assert!(!validate_experience("5 years").passed);
    }

    #[test]
    fn test_experience_overflow_is_out_of_range() {
        let r = validate_experience("99999999999999999999");
        assert!(!r.passed);
        assert!(r.reason.unwrap().contains("realistic"));
    }

    #[test]
    fn test_min_text() {
        assert!(validate_min_text("QA").passed);
        assert!(!validate_min_text("Q").passed);
    }

    #[test]
    fn test_validate_field_rejects_empty_for_every_field() {
        for field in crate::screening::fields::FIELD_SEQUENCE {
            let r = validate_field(field, "");
            assert!(!r.passed, "{field} accepted empty input");
            assert!(!r.reason.unwrap().is_empty());
        }
    }

    #[test]
    fn test_validate_field_dispatch() {
        assert!(validate_field(Field::Email, "jane@example.com").passed);
        assert!(!validate_field(Field::Email, "Jane Doe").passed);
        assert!(validate_field(Field::TechStack, "Go").passed);
        assert!(!validate_field(Field::Location, "X").passed);
    }
}
