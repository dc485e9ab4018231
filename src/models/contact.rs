//! Contact model representing a person in the directory.

use crate::domain::name::trim_field;
use crate::domain::{
    normalize_name_field, validate_name_field, BirthDate, EmailAddress, NameField, PhoneNumber,
    ValidationError,
};
use crate::error::{DirectoryError, DirectoryResult};
use serde::Serialize;
use std::fmt;

/// A person in the directory.
///
/// Every field goes through its validator on the way in, both at
/// construction and in the setters. A setter that rejects its input leaves
/// the contact untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    last_name: String,
    first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
    birth_date: BirthDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<EmailAddress>,
    phone_numbers: Vec<PhoneNumber>,
}

impl Contact {
    /// Build a contact from raw field text.
    ///
    /// Names are normalized and validated; an empty middle name, address or
    /// email means the field is absent. The contact starts with no phone
    /// numbers.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation, checked in the order
    /// last name, first name, middle name, email.
    pub fn new(
        last_name: &str,
        first_name: &str,
        middle_name: &str,
        birth_date: BirthDate,
        address: &str,
        email: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            last_name: required_name(NameField::LastName, last_name)?,
            first_name: required_name(NameField::FirstName, first_name)?,
            middle_name: optional_name(NameField::MiddleName, middle_name)?,
            birth_date,
            address: clean_address(address),
            email: EmailAddress::parse_optional(email)?,
            phone_numbers: Vec::new(),
        })
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// "Last First Middle", skipping an absent middle name.
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.last_name, self.first_name, middle),
            None => format!("{} {}", self.last_name, self.first_name),
        }
    }

    pub fn set_last_name(&mut self, last_name: &str) -> Result<(), ValidationError> {
        self.last_name = required_name(NameField::LastName, last_name)?;
        Ok(())
    }

    pub fn set_first_name(&mut self, first_name: &str) -> Result<(), ValidationError> {
        self.first_name = required_name(NameField::FirstName, first_name)?;
        Ok(())
    }

    /// Blank input clears the middle name.
    pub fn set_middle_name(&mut self, middle_name: &str) -> Result<(), ValidationError> {
        self.middle_name = optional_name(NameField::MiddleName, middle_name)?;
        Ok(())
    }

    /// `BirthDate` is valid by construction, so this cannot fail.
    pub fn set_birth_date(&mut self, birth_date: BirthDate) {
        self.birth_date = birth_date;
    }

    /// Addresses are free text. The edges are trimmed and line breaks become
    /// single spaces, since a record occupies exactly one stored line.
    pub fn set_address(&mut self, address: &str) {
        self.address = clean_address(address);
    }

    /// Blank input clears the email.
    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = EmailAddress::parse_optional(email)?;
        Ok(())
    }

    pub fn phone_numbers(&self) -> &[PhoneNumber] {
        &self.phone_numbers
    }

    pub fn phone_count(&self) -> usize {
        self.phone_numbers.len()
    }

    pub fn has_phone_numbers(&self) -> bool {
        !self.phone_numbers.is_empty()
    }

    pub fn phone_number(&self, index: usize) -> DirectoryResult<&PhoneNumber> {
        self.phone_numbers
            .get(index)
            .ok_or(DirectoryError::PhoneIndexOutOfRange {
                index,
                len: self.phone_numbers.len(),
            })
    }

    pub fn add_phone_number(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phone_numbers.push(phone);
        Ok(())
    }

    /// Append a batch of numbers. If any entry is invalid none are added.
    pub fn add_phone_numbers<I, S>(&mut self, phones: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch = parse_phones(phones)?;
        self.phone_numbers.extend(batch);
        Ok(())
    }

    /// Replace every number. If any entry is invalid the list is kept as is.
    pub fn set_phone_numbers<I, S>(&mut self, phones: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.phone_numbers = parse_phones(phones)?;
        Ok(())
    }

    /// Remove and return the number at `index`.
    pub fn remove_phone_number(&mut self, index: usize) -> DirectoryResult<PhoneNumber> {
        if index >= self.phone_numbers.len() {
            return Err(DirectoryError::PhoneIndexOutOfRange {
                index,
                len: self.phone_numbers.len(),
            });
        }
        Ok(self.phone_numbers.remove(index))
    }

    pub fn clear_phone_numbers(&mut self) {
        self.phone_numbers.clear();
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Name: {}", self.full_name())?;
        writeln!(f, "  Birth date: {}", self.birth_date)?;
        writeln!(f, "  Address: {}", self.address.as_deref().unwrap_or(""))?;
        writeln!(
            f,
            "  Email: {}",
            self.email.as_ref().map_or("", EmailAddress::as_str)
        )?;
        if self.phone_numbers.is_empty() {
            write!(f, "  Phones: none")
        } else {
            let phones: Vec<&str> = self.phone_numbers.iter().map(PhoneNumber::as_str).collect();
            write!(f, "  Phones: {}", phones.join(", "))
        }
    }
}

fn required_name(field: NameField, raw: &str) -> Result<String, ValidationError> {
    if !validate_name_field(raw) {
        return Err(ValidationError::InvalidName {
            field,
            value: raw.to_string(),
        });
    }
    Ok(normalize_name_field(raw))
}

fn optional_name(field: NameField, raw: &str) -> Result<Option<String>, ValidationError> {
    if normalize_name_field(raw).is_empty() {
        return Ok(None);
    }
    required_name(field, raw).map(Some)
}

fn clean_address(raw: &str) -> Option<String> {
    let flattened = trim_field(raw)
        .split(['\r', '\n'])
        .map(trim_field)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!flattened.is_empty()).then_some(flattened)
}

fn parse_phones<I, S>(phones: I) -> Result<Vec<PhoneNumber>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    phones
        .into_iter()
        .map(|phone| PhoneNumber::new(phone.as_ref()))
        .collect()
}
