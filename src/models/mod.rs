//! Data models for directory entities.

pub mod contact;

pub use contact::Contact;
