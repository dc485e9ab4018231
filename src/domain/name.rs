//! Person name normalization and validation.
//!
//! Names may be written in Latin or Cyrillic script. Besides letters, a name
//! may hold ASCII digits, spaces, hyphens and apostrophes, but it must open
//! with a letter and must not open or close with a hyphen.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t\n\r\x0B\x0C]+").expect("Failed to compile whitespace regex")
});

/// Whitespace recognised in contact fields: space, tab, newline, carriage
/// return, form-feed and vertical tab.
pub(crate) fn is_field_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Trim field whitespace from both ends of `raw`.
pub(crate) fn trim_field(raw: &str) -> &str {
    raw.trim_matches(is_field_whitespace)
}

/// Trim the edges and collapse every inner whitespace run into one space.
///
/// Returns an empty string for empty or whitespace-only input. Applying it
/// twice gives the same result as applying it once.
pub fn normalize_name_field(raw: &str) -> String {
    let trimmed = trim_field(raw);
    if trimmed.is_empty() {
        return String::new();
    }
    WHITESPACE_RUN.replace_all(trimmed, " ").into_owned()
}

/// Check a name field after normalizing it.
pub fn validate_name_field(raw: &str) -> bool {
    is_valid_normalized_name(&normalize_name_field(raw))
}

fn is_valid_normalized_name(name: &str) -> bool {
    let (first, last) = match (name.chars().next(), name.chars().last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return false,
    };

    name.chars().all(is_allowed_name_char) && is_name_letter(first) && last != '-'
}

fn is_allowed_name_char(c: char) -> bool {
    is_name_letter(c) || c.is_ascii_digit() || matches!(c, ' ' | '-' | '\'')
}

/// Latin (ASCII) or Cyrillic letter.
fn is_name_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || is_cyrillic_letter(c)
}

fn is_cyrillic_letter(c: char) -> bool {
    // Cyrillic and Cyrillic Supplement blocks.
    matches!(c, '\u{0400}'..='\u{052F}') && c.is_alphabetic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_collapses() {
        assert_eq!(normalize_name_field("  Anna   Maria \t"), "Anna Maria");
        assert_eq!(normalize_name_field("Anna\t\n\r Maria"), "Anna Maria");
        assert_eq!(normalize_name_field("\x0B\x0CIvan\x0C"), "Ivan");
        assert_eq!(normalize_name_field(""), "");
        assert_eq!(normalize_name_field(" \t\n "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["  a  b  ", "Иван   Петрович", "\tx\t", "", "O'Brien", " - "] {
            let once = normalize_name_field(raw);
            assert_eq!(normalize_name_field(&once), once, "input {:?}", raw);
        }
    }

    #[test]
    fn test_validate_accepts_latin_and_cyrillic() {
        assert!(validate_name_field("Иван"));
        assert!(validate_name_field("Ivan"));
        assert!(validate_name_field("O'Brien"));
        assert!(validate_name_field("Anna-Maria"));
        assert!(validate_name_field("Салтыков-Щедрин"));
        assert!(validate_name_field("Ёлкин"));
        assert!(validate_name_field("Louis 14"));
        assert!(validate_name_field("  Jean   Luc  "));
    }

    #[test]
    fn test_validate_rejects_bad_edges() {
        assert!(!validate_name_field(""));
        assert!(!validate_name_field("   "));
        assert!(!validate_name_field("-Ivan"));
        assert!(!validate_name_field("Ivan-"));
        assert!(!validate_name_field("'Ivan"));
        assert!(!validate_name_field("1van"));
    }

    #[test]
    fn test_validate_rejects_foreign_characters() {
        assert!(!validate_name_field("Iv@n"));
        assert!(!validate_name_field("Ivan_Petrov"));
        assert!(!validate_name_field("Ivan\u{0}"));
        assert!(!validate_name_field("Zoë"));
        assert!(!validate_name_field("Ἀλέξανδρος"));
        assert!(!validate_name_field("שלום"));
        // Cyrillic digit-like sign is in the block but not a letter.
        assert!(!validate_name_field("Иван\u{0482}"));
    }
}
