//! North-American phone number normalization.
//!
//! A phone is valid when it carries exactly ten decimal digits once every
//! other character is removed. Valid numbers are canonicalized to
//! `DDD-DDD-DDDD`.
//!
//! [`format`] is deliberately lenient: anything that does not reduce to ten
//! digits comes back unchanged. Callers that need strict rejection must check
//! [`is_valid_phone`] first.

use std::sync::LazyLock;

use regex::Regex;

/// Number of digits in a North-American number without country code.
pub const PHONE_DIGITS: usize = 10;

/// Splits ten digits into area code, exchange, and line number.
static TEN_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{3})(\d{3})(\d{4})$").expect("ten digit regex")
});

/// Remove every character that is not an ASCII decimal digit.
pub fn strip_non_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// `true` iff `raw` contains exactly ten digits.
pub fn is_valid_phone(raw: &str) -> bool {
    raw.chars().filter(char::is_ascii_digit).count() == PHONE_DIGITS
}

/// Canonicalize `raw` to `DDD-DDD-DDDD`, or return it unchanged.
pub fn format(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    match TEN_DIGITS_RE.captures(&digits) {
        Some(caps) => format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_non_digits_keeps_only_digits() {
        assert_eq!(strip_non_digits("(555) 123-4567"), "5551234567");
        assert_eq!(strip_non_digits("+1 555.123.4567 x89"), "1555123456789");
        assert_eq!(strip_non_digits("no digits"), "");
    }

    #[test]
    fn ten_digit_inputs_are_valid_and_canonical() {
        for raw in [
            "5551234567",
            "555-123-4567",
            "(555) 123-4567",
            "555.123.4567",
            " 555 123 4567 ",
        ] {
            assert!(is_valid_phone(raw), "{raw} should be valid");
            assert_eq!(format(raw), "555-123-4567");
        }
    }

    #[test]
    fn other_digit_counts_are_invalid_and_untouched() {
        for raw in [
            "",
            "555-123-456",
            "1-555-123-4567",
            "555-123-4567 ext 12",
            "call me",
        ] {
            assert!(!is_valid_phone(raw), "{raw} should be invalid");
            assert_eq!(format(raw), raw);
        }
    }

    #[test]
    fn format_is_idempotent() {
        for raw in ["5551234567", "(555) 123-4567", "555-123-456", "1 555 123 4567", "abc"] {
            let once = format(raw);
            assert_eq!(format(&once), once);
        }
    }

    #[test]
    fn non_ascii_digits_are_not_counted() {
        // Arabic-Indic digits are Unicode digits but not part of the number.
        assert!(!is_valid_phone("٥٥٥١٢٣٤٥٦٧"));
    }
}
