//! Line format of the directory file.
//!
//! One contact per line:
//!
//! ```text
//! lastName|firstName|middleName|DD.MM.YYYY|address|email|phone1;phone2;...
//! ```
//!
//! Absent optional fields are empty strings between separators. Field values
//! are written as is: a `|` or `;` inside a value is not escaped and breaks
//! the line on the next load.

use crate::domain::{BirthDate, ValidationError};
use crate::models::Contact;
use chrono::NaiveDate;
use thiserror::Error;

pub const FIELD_SEPARATOR: &str = "|";
pub const PHONE_SEPARATOR: &str = ";";

/// Number of leading fields every line must carry; the phone list is optional.
pub const REQUIRED_FIELDS: usize = 6;

/// Why a stored line could not be turned into a contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("not enough fields: expected at least 6, found {found}")]
    TooFewFields { found: usize },

    #[error("bad birth date: {0}")]
    MalformedDate(ValidationError),

    #[error("invalid field: {0}")]
    InvalidField(ValidationError),

    #[error("line is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Serialize one contact, without the line terminator.
pub fn encode_contact(contact: &Contact) -> String {
    let phones: Vec<&str> = contact
        .phone_numbers()
        .iter()
        .map(|phone| phone.as_str())
        .collect();
    let phones = phones.join(PHONE_SEPARATOR);
    let birth_date = contact.birth_date().to_string();

    let fields: [&str; 7] = [
        contact.last_name(),
        contact.first_name(),
        contact.middle_name().unwrap_or(""),
        &birth_date,
        contact.address().unwrap_or(""),
        contact.email().map_or("", |email| email.as_str()),
        &phones,
    ];
    fields.join(FIELD_SEPARATOR)
}

/// Serialize every contact, one `\n`-terminated line each.
pub fn encode_contacts(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for contact in contacts {
        out.push_str(&encode_contact(contact));
        out.push('\n');
    }
    out
}

/// Parse one non-blank line. Birth dates are checked against `today`.
pub fn decode_line(line: &str, today: NaiveDate) -> Result<Contact, LineError> {
    let tokens: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if tokens.len() < REQUIRED_FIELDS {
        return Err(LineError::TooFewFields {
            found: tokens.len(),
        });
    }

    let birth_date = BirthDate::parse_dotted(tokens[3], today).map_err(LineError::MalformedDate)?;

    let mut contact = Contact::new(
        tokens[0], tokens[1], tokens[2], birth_date, tokens[4], tokens[5],
    )
    .map_err(LineError::InvalidField)?;

    if let Some(phones) = tokens.get(REQUIRED_FIELDS).filter(|t| !t.is_empty()) {
        let batch = phones
            .split(PHONE_SEPARATOR)
            .filter(|phone| !phone.is_empty());
        contact
            .add_phone_numbers(batch)
            .map_err(LineError::InvalidField)?;
    }

    Ok(contact)
}
