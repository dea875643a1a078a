//! The date stamped into a post header.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar date of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostDate {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

impl PostDate {
    pub fn new(day: u8, month: u8, year: u16) -> Self {
        Self { day, month, year }
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    /// Parse an ISO `YYYY-MM-DD` date.
    pub fn parse_iso(input: &str) -> Option<Self> {
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .map(Self::from_naive)
    }

    fn from_naive(date: NaiveDate) -> Self {
        Self {
            day: date.day() as u8,
            month: date.month() as u8,
            year: date.year().clamp(1, u16::MAX as i32) as u16,
        }
    }

    /// Header representation, see [`format_date`].
    pub fn formatted(&self) -> String {
        format_date(self.day, self.month, self.year)
    }
}

/// Format a header date as `MM/D/YYYY`.
///
/// The month is zero-padded to two digits, the day is not:
/// `format_date(5, 3, 2024)` is `"03/5/2024"`.
pub fn format_date(day: u8, month: u8, year: u16) -> String {
    format!("{month:02}/{day}/{year}")
}
