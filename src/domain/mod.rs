//! Domain value objects and field validators.
//!
//! This module contains the validation rules for every contact field:
//! person names, email addresses, phone numbers and birth dates. Value
//! objects validate at construction time so an invalid field can never be
//! represented.

pub mod birth_date;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use birth_date::BirthDate;
pub use email::{normalize_email, validate_email, EmailAddress};
pub use errors::{NameField, ValidationError};
pub use name::{normalize_name_field, validate_name_field};
pub use phone::{is_valid_phone_number, PhoneNumber};
