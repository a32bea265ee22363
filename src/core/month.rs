//! Month key handling - The `YYYY-MM` string that scopes every computation.
//!
//! All record sets are aggregated per month key; the engine never aggregates
//! across months. Malformed keys are rejected here, at the boundary, before
//! any records are fetched.

use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// A validated `YYYY-MM` month key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Parses a `YYYY-MM` string, rejecting anything else.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMonthKey`] for malformed input or a month
    /// outside `01..=12`.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidMonthKey {
            value: value.to_string(),
        };

        let (year_part, month_part) = value.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid());
        }
        if !year_part.bytes().all(|b| b.is_ascii_digit())
            || !month_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }

    /// The month key for today's date (UTC).
    #[must_use]
    pub fn current() -> Self {
        let now = Utc::now().date_naive();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    /// Builds a key from a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year component.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month component (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The first calendar day of the month.
    ///
    /// # Panics
    /// Never panics: year and month are validated at construction.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        #[allow(clippy::unwrap_used)]
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// The previous month (archive navigation).
    #[must_use]
    pub const fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next month (archive navigation).
    #[must_use]
    pub const fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Long label used by the monthly summary header, e.g. `"January 2025"`.
    #[must_use]
    pub fn label_long(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Short label used by the due-list header, e.g. `"Jan 2025"`.
    #[must_use]
    pub fn label_short(&self) -> String {
        self.first_day().format("%b %Y").to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_valid_key() {
        let key = MonthKey::parse("2025-03").unwrap();
        assert_eq!(key.year(), 2025);
        assert_eq!(key.month(), 3);
        assert_eq!(key.to_string(), "2025-03");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["2025", "2025-3", "25-03", "2025-13", "2025-00", "2025/03", "abcd-ef", ""] {
            let result = MonthKey::parse(bad);
            assert!(
                matches!(result, Err(Error::InvalidMonthKey { value: _ })),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn test_labels() {
        let key = MonthKey::parse("2025-01").unwrap();
        assert_eq!(key.label_long(), "January 2025");
        assert_eq!(key.label_short(), "Jan 2025");
    }

    #[test]
    fn test_prev_next_across_year_boundary() {
        let jan = MonthKey::parse("2025-01").unwrap();
        assert_eq!(jan.prev().to_string(), "2024-12");
        assert_eq!(jan.prev().next(), jan);

        let dec = MonthKey::parse("2024-12").unwrap();
        assert_eq!(dec.next().to_string(), "2025-01");
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
        assert_eq!(MonthKey::from_date(date).to_string(), "2025-07");
    }

    #[test]
    fn test_ordering_matches_chronology() {
        let a = MonthKey::parse("2024-12").unwrap();
        let b = MonthKey::parse("2025-01").unwrap();
        assert!(a < b);
    }
}
