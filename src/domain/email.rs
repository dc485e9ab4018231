//! EmailAddress value object.

use super::errors::ValidationError;
use super::name::is_field_whitespace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Remove all whitespace, lowercase ASCII letters and keep only the first `@`.
pub fn normalize_email(raw: &str) -> String {
    let mut seen_at = false;
    raw.chars()
        .filter(|c| !is_field_whitespace(*c))
        .filter(|c| {
            if *c != '@' {
                return true;
            }
            !std::mem::replace(&mut seen_at, true)
        })
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Structural email check. Empty input passes, the field is optional.
///
/// The check runs on the whitespace-free, lowercased text, so a doubled `@`
/// is rejected instead of being silently merged.
pub fn validate_email(raw: &str) -> bool {
    let compact: String = raw
        .chars()
        .filter(|c| !is_field_whitespace(*c))
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if compact.is_empty() {
        return true;
    }

    if compact.matches('@').count() != 1 {
        return false;
    }

    let (local, domain) = match compact.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    match domain.find('.') {
        Some(dot) => dot != 0 && dot != domain.len() - 1,
        None => false,
    }
}

/// A type-safe wrapper for email addresses.
///
/// The address is validated at construction time and stored normalized.
///
/// # Example
///
/// ```
/// use phone_directory::domain::EmailAddress;
///
/// let email = EmailAddress::new(" Ivan@Mail.RU ").unwrap();
/// assert_eq!(email.as_str(), "ivan@mail.ru");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the address is empty or
    /// fails [`validate_email`].
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        let normalized = normalize_email(&email);

        if normalized.is_empty() || !validate_email(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(normalized))
    }

    /// Parse an optional email field: blank input means "no email".
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, ValidationError> {
        if normalize_email(raw).is_empty() {
            return Ok(None);
        }
        Self::new(raw).map(Some)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
