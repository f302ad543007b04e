//! Calendar birth date with the fixed `dd/MM/yyyy` text layout.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DomainError;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// A date of birth without a time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Wraps an already-constructed calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses `DD/MM/YYYY` text.
    ///
    /// The layout is strict: two-digit day, two-digit month and four-digit
    /// year separated by `/`. Anything else, including impossible dates such
    /// as `31/02/2000`, fails with an `InvalidDateFormat` error.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        if !has_date_shape(text) {
            return Err(DomainError::invalid_date_format(text));
        }
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::invalid_date_format(text))
    }

    /// Renders the date as `DD/MM/YYYY`.
    pub fn format(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }

    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Number of completed years between this date and `today`.
    ///
    /// A birthday not yet reached in `today`'s year does not count. Dates in
    /// the future yield zero.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let born = self.0;
        if today < born {
            return 0;
        }
        let mut years = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}
