//! Birth date value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// A calendar date that is not after the reference "today".
///
/// Rendered as `DD.MM.YYYY`. Construction is the only way to obtain one, so
/// every instance satisfies the month/day bounds (leap-year February
/// included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate {
    year: i32,
    month: u32,
    day: u32,
}

impl BirthDate {
    /// Validate against the local wall-clock date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        Self::new_as_of(year, month, day, today())
    }

    /// Validate against an explicit reference date.
    pub fn new_as_of(
        year: i32,
        month: u32,
        day: u32,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if !Self::is_valid(year, month, day, today) {
            return Err(ValidationError::InvalidDate { day, month, year });
        }
        Ok(Self { year, month, day })
    }

    /// Whether the triple is a real calendar date no later than `today`.
    pub fn is_valid(year: i32, month: u32, day: u32, today: NaiveDate) -> bool {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return false;
        }
        (year, month, day) <= (today.year(), today.month(), today.day())
    }

    /// Parse `day.month.year` text, as written by the directory file.
    ///
    /// The text must hold exactly two `.` separators; each part is trimmed
    /// and parsed as an integer before the date is validated.
    pub fn parse_dotted(text: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::MalformedDate(text.to_string());

        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(malformed());
        }

        let day = parts[0].trim().parse::<u32>().map_err(|_| malformed())?;
        let month = parts[1].trim().parse::<u32>().map_err(|_| malformed())?;
        let year = parts[2].trim().parse::<i32>().map_err(|_| malformed())?;

        Self::new_as_of(year, month, day, today)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

// Serde support - serialize in the same DD.MM.YYYY form the file uses
impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The local calendar date right now.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
