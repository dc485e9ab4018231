//! Domain validation errors.

use std::fmt;

/// Which name field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    LastName,
    FirstName,
    MiddleName,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastName => write!(f, "last name"),
            Self::FirstName => write!(f, "first name"),
            Self::MiddleName => write!(f, "middle name"),
        }
    }
}

/// Errors that can occur during domain value object validation.
///
/// Every variant carries the rejected input so callers can report it back
/// and retry with a corrected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name field failed the name rules.
    InvalidName { field: NameField, value: String },

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The year/month/day triple is not a real, non-future date.
    InvalidDate { day: u32, month: u32, year: i32 },

    /// Birth date text is not in `DD.MM.YYYY` shape.
    MalformedDate(String),
}

impl ValidationError {
    /// Short name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidName { field, .. } => match field {
                NameField::LastName => "last_name",
                NameField::FirstName => "first_name",
                NameField::MiddleName => "middle_name",
            },
            Self::InvalidEmail(_) => "email",
            Self::InvalidPhone(_) => "phone_number",
            Self::InvalidDate { .. } | Self::MalformedDate(_) => "birth_date",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { field, value } => write!(f, "Invalid {}: {:?}", field, value),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidDate { day, month, year } => write!(
                f,
                "Invalid date: {}.{}.{}. Date must be valid and not in the future",
                day, month, year
            ),
            Self::MalformedDate(text) => {
                write!(f, "Malformed birth date (expected DD.MM.YYYY): {}", text)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
