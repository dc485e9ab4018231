//! Phone Directory - a personal contact directory backed by a flat text file.
//!
//! Contacts carry a validated name, birth date, optional address and email,
//! and any number of phone numbers. The directory keeps them in order and
//! rewrites its backing file after every change, undoing the change in
//! memory when the write fails.
//!
//! # Architecture
//!
//! - **domain**: Field validators and value objects (names, email, phone, birth date)
//! - **models**: The `Contact` record
//! - **repositories**: Storage backends for the directory text
//! - **directory**: The `ContactDirectory` store and its line format
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use config::Config;
pub use directory::{ContactDirectory, LineError, LoadReport};
pub use domain::{BirthDate, EmailAddress, NameField, PhoneNumber, ValidationError};
pub use error::{ConfigError, DirectoryError, DirectoryResult};
pub use models::Contact;
pub use repositories::{ContactStorage, FileStorage, MemoryStorage};
