//! PhoneNumber value object.

use super::errors::ValidationError;
use super::name::trim_field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Prefix +7 or 8, then one of: 10 digits, (3)7, (3)3-2-2.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+7|8)(?:[0-9]{10}|\([0-9]{3}\)[0-9]{7}|\([0-9]{3}\)[0-9]{3}-[0-9]{2}-[0-9]{2})$")
        .expect("Failed to compile phone number regex")
});

/// Check a phone number against the accepted shapes after trimming its edges.
///
/// Accepted, with prefix `+7` or `8`:
/// - `+79161234567`
/// - `8(495)1234567`
/// - `8(495)123-45-67`
pub fn is_valid_phone_number(raw: &str) -> bool {
    let trimmed = trim_field(raw);
    !trimmed.is_empty() && PHONE_PATTERN.is_match(trimmed)
}

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// Surrounding whitespace is dropped; the inner text is kept as written.
///
/// # Example
///
/// ```
/// use phone_directory::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new(" 8(495)123-45-67 ").unwrap();
/// assert_eq!(phone.as_str(), "8(495)123-45-67");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone_number(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(trim_field(&phone).to_string()))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_all_three_shapes() {
        for prefix in ["+7", "8"] {
            assert!(is_valid_phone_number(&format!("{}9161234567", prefix)));
            assert!(is_valid_phone_number(&format!("{}(495)1234567", prefix)));
            assert!(is_valid_phone_number(&format!("{}(495)123-45-67", prefix)));
        }
    }

    #[test]
    fn test_trims_edges_only() {
        assert!(is_valid_phone_number("  +79161234567\t\n"));
        assert!(!is_valid_phone_number("+7 9161234567"));
        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number(" \t "));
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(!is_valid_phone_number("79161234567"));
        assert!(!is_valid_phone_number("+89161234567"));
        assert!(!is_valid_phone_number("+7916123456"));
        assert!(!is_valid_phone_number("+791612345678"));
        assert!(!is_valid_phone_number("8(495)123456"));
        assert!(!is_valid_phone_number("8(495)12-345-67"));
        assert!(!is_valid_phone_number("8(495)123-4567"));
        assert!(!is_valid_phone_number("8-495-123-45-67"));
        assert!(!is_valid_phone_number("8(49)5123-45-67"));
        assert!(!is_valid_phone_number("+1-555-1234"));
        assert!(!is_valid_phone_number("+7916123456a"));
        // Non-ASCII digits do not count.
        assert!(!is_valid_phone_number("+7٩١٦١٢٣٤٥٦٧"));
    }

    #[test]
    fn test_phone_stores_trimmed() {
        let phone = PhoneNumber::new(" +79161234567 ").unwrap();
        assert_eq!(phone.as_str(), "+79161234567");
    }

    #[test]
    fn test_phone_invalid_keeps_input_in_error() {
        assert_eq!(
            PhoneNumber::new("bad"),
            Err(ValidationError::InvalidPhone("bad".to_string()))
        );
    }

    #[test]
    fn test_phone_digits_only() {
        let phone = PhoneNumber::new("+7(916)123-45-67").unwrap();
        assert_eq!(phone.digits_only(), "79161234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("8(495)123-45-67").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"8(495)123-45-67\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
