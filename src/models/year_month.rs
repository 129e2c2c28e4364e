//! Calendar month model.
//!
//! [`YearMonth`] identifies one monthly hours record. Its ordering is
//! chronological, which is the order the accrual engine consumes records in.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month (year plus month number 1-12).
///
/// # Example
///
/// ```
/// use leave_engine::models::YearMonth;
///
/// let dec = YearMonth::new(2024, 12).unwrap();
/// assert_eq!(dec.next(), YearMonth::new(2025, 1).unwrap());
/// assert_eq!(dec.to_string(), "2024-12");
/// assert_eq!(dec.sort_key(), 202412);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearMonth")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawYearMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = EngineError;

    fn try_from(raw: RawYearMonth) -> Result<Self, Self::Error> {
        YearMonth::new(raw.year, raw.month)
    }
}

impl YearMonth {
    /// Creates a month, rejecting month numbers outside 1..=12.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Builds a month from a linear month index (`year * 12 + month - 1`).
    pub fn from_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month component (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Linear month index, consecutive months differ by one.
    pub fn index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Display sort key, `year * 100 + month`.
    pub fn sort_key(&self) -> i64 {
        i64::from(self.year) * 100 + i64::from(self.month)
    }

    /// The following calendar month.
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Number of days in this month, leap years included.
    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .and_then(|first| first.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
