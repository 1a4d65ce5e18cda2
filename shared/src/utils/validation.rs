//! Contact format validation

use once_cell::sync::Lazy;
use regex::Regex;

// E.164 format: + followed by 1-15 digits, no leading zero
static E164_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

// Intentionally loose; full RFC 5322 validation belongs to the mail server
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check that a phone number is in E.164 format (e.g. `+15555550123`)
pub fn is_valid_phone(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Check that an email address is plausibly formed
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_numbers() {
        assert!(is_valid_phone("+15555550123"));
        assert!(is_valid_phone("+61412345678"));
        assert!(is_valid_phone("+8613812345678"));
    }

    #[test]
    fn test_invalid_phone_numbers() {
        assert!(!is_valid_phone("15555550123")); // missing +
        assert!(!is_valid_phone("+05555550123")); // leading zero
        assert!(!is_valid_phone("+1 555 555 0123")); // spaces
        assert!(!is_valid_phone("+"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }
}
