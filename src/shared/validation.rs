use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the email shape check applied on the client side
    /// Accepts a simple `local@domain.tld` shape
    /// - Valid: "asha@example.com", "a.b+c@mail.co.in"
    /// - Invalid: "asha", "asha@", "@example.com", "a b@example.com"
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Client-side email shape check. Flags a malformed address without
/// blocking the guest from editing it further.
pub fn email_looks_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Normalize a phone field the way the form's input filter does:
/// strip everything that is not a digit, then truncate to 10 digits,
/// or 12 when the value carries the "91" country-code prefix.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.starts_with("91") && digits.len() > 10 {
        digits[..digits.len().min(12)].to_string()
    } else if digits.len() > 10 {
        digits[..10].to_string()
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_regex_valid() {
        assert!(email_looks_valid("asha@example.com"));
        assert!(email_looks_valid("a.b+c@mail.co.in"));
        assert!(email_looks_valid("guest_42@wedding.example"));
    }

    #[test]
    fn test_email_regex_invalid() {
        assert!(!email_looks_valid("asha")); // no @
        assert!(!email_looks_valid("asha@")); // no domain
        assert!(!email_looks_valid("@example.com")); // no local part
        assert!(!email_looks_valid("asha@example")); // no tld
        assert!(!email_looks_valid("a b@example.com")); // whitespace
        assert!(!email_looks_valid("")); // empty
    }

    #[test]
    fn test_normalize_phone_strips_non_digits() {
        assert_eq!(normalize_phone("98765-43210"), "9876543210");
        assert_eq!(normalize_phone("(987) 654 3210"), "9876543210");
    }

    #[test]
    fn test_normalize_phone_country_prefix() {
        // 12 digits kept when the "91" prefix is present
        assert_eq!(normalize_phone("+91 98765 43210"), "919876543210");
        // extra digits after the prefixed 12 are dropped
        assert_eq!(normalize_phone("91987654321099"), "919876543210");
    }

    #[test]
    fn test_normalize_phone_truncates_to_ten() {
        assert_eq!(normalize_phone("98765432109"), "9876543210");
        assert_eq!(normalize_phone("987654321012345"), "9876543210");
    }

    #[test]
    fn test_normalize_phone_short_values_pass_through() {
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("12345"), "12345");
        // exactly 10 digits starting with 91 is a local number, not a prefix
        assert_eq!(normalize_phone("9198765432"), "9198765432");
    }
}
