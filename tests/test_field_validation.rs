//! Tests for the field validators and the contact record rules.
//!
//! These tests validate:
//! - Name and email rules on the documented examples
//! - The closed set of accepted phone shapes
//! - Birth date validity and its DD.MM.YYYY round trip
//! - All-or-nothing phone batches on a contact

use chrono::{Datelike, NaiveDate};
use phone_directory::domain::{
    is_valid_phone_number, normalize_email, normalize_name_field, validate_email,
    validate_name_field,
};
use phone_directory::{BirthDate, Contact, ValidationError};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn test_name_examples() {
    assert!(validate_name_field("Иван"));
    assert!(!validate_name_field("-Ivan"));
    assert!(!validate_name_field(""));
    assert!(validate_name_field("O'Brien"));
}

#[test]
fn test_name_normalization_is_idempotent() {
    let samples = [
        "",
        " ",
        "Ivan",
        "  Ivan  Petrov ",
        "\tАнна\n\r\x0BМария\x0C",
        "a  -  b",
        "   x",
    ];
    for raw in samples {
        let once = normalize_name_field(raw);
        assert_eq!(normalize_name_field(&once), once, "input {:?}", raw);
        assert!(!once.starts_with(' ') && !once.ends_with(' '));
        assert!(!once.contains("  "));
    }
}

#[test]
fn test_email_examples() {
    assert!(validate_email(""));
    assert!(validate_email("a@b.c"));
    assert!(!validate_email("a@@b.com"));
    assert!(!validate_email("ab.com"));
    assert_eq!(normalize_email(" A B@C.D "), "ab@c.d");
}

/// Every accepted shape, with each prefix, is valid; near misses are not.
#[test]
fn test_phone_shapes_are_a_closed_set() {
    let bodies_ok = ["9161234567", "(916)1234567", "(916)123-45-67"];
    let bodies_bad = [
        "916123456",
        "91612345678",
        "(916)123456",
        "(916)12345678",
        "(916)12-345-67",
        "(916)123-456-7",
        "(916) 123-45-67",
        "916-123-45-67",
        "(9161)234567",
        "(91)61234567",
    ];

    for prefix in ["+7", "8"] {
        for body in bodies_ok {
            let phone = format!("{}{}", prefix, body);
            assert!(is_valid_phone_number(&phone), "{}", phone);
            assert!(is_valid_phone_number(&format!(" \t{}\n", phone)), "{}", phone);
        }
        for body in bodies_bad {
            let phone = format!("{}{}", prefix, body);
            assert!(!is_valid_phone_number(&phone), "{}", phone);
        }
    }

    for prefix in ["7", "+8", "+", "", "007", "+77"] {
        for body in bodies_ok {
            let phone = format!("{}{}", prefix, body);
            assert!(!is_valid_phone_number(&phone), "{}", phone);
        }
    }
}

/// Every real date up to the reference date renders and parses back.
#[test]
fn test_birth_date_round_trip_over_calendar() {
    let today = reference_date();
    let mut date = NaiveDate::from_ymd_opt(1896, 1, 1).unwrap();

    while date <= today {
        let birth = BirthDate::new_as_of(date.year(), date.month(), date.day(), today).unwrap();
        let text = birth.to_string();
        let parsed = BirthDate::parse_dotted(&text, today).unwrap();
        assert_eq!(
            (parsed.year(), parsed.month(), parsed.day()),
            (date.year(), date.month(), date.day())
        );
        date = date.succ_opt().unwrap();
    }

    assert!(BirthDate::new_as_of(2024, 3, 2, today).is_err());
    assert!(BirthDate::new_as_of(2024, 2, 29, today).is_ok());
    assert!(BirthDate::new_as_of(2023, 2, 29, today).is_err());
}

#[test]
fn test_add_phone_numbers_batch_is_all_or_nothing() {
    let birth = BirthDate::new_as_of(1990, 5, 15, reference_date()).unwrap();
    let mut contact = Contact::new("Петров", "Иван", "", birth, "", "").unwrap();

    let result = contact.add_phone_numbers(["+79161234567", "bad"]);

    assert_eq!(
        result,
        Err(ValidationError::InvalidPhone("bad".to_string()))
    );
    assert_eq!(contact.phone_count(), 0);
}

#[test]
fn test_contact_rejects_invalid_fields_at_construction() {
    let birth = BirthDate::new_as_of(1990, 5, 15, reference_date()).unwrap();

    assert!(Contact::new("Petrov", "Iv@n", "", birth, "", "").is_err());
    assert!(Contact::new("Petrov", "Ivan", "-", birth, "", "").is_err());
    assert!(Contact::new("Petrov", "Ivan", "", birth, "", "ivan@").is_err());
    assert!(Contact::new("Petrov", "Ivan", "", birth, "anything | goes", "").is_ok());
}
