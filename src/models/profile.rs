//! Employee profile models.
//!
//! This module defines the [`LeaveProfile`] header fields shown above the
//! hours table, and the [`HireDate`] used to bulk-fill months.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::YearMonth;

/// A hire date whose day is within the actual length of its month.
///
/// # Example
///
/// ```
/// use leave_engine::models::HireDate;
///
/// assert!(HireDate::new(2024, 2, 29).is_ok());
/// assert!(HireDate::new(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NaiveDate", into = "NaiveDate")]
pub struct HireDate(NaiveDate);

impl HireDate {
    /// Creates a hire date, rejecting days that do not exist in the month.
    pub fn new(year: i32, month: u32, day: u32) -> EngineResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(EngineError::InvalidHireDate { year, month, day })
    }

    /// The valid day choices for a given year and month.
    pub fn day_options(year: i32, month: u32) -> EngineResult<std::ops::RangeInclusive<u32>> {
        let period = YearMonth::new(year, month)?;
        Ok(1..=period.days_in_month())
    }

    /// The hire date as a calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The month of hire, where bulk-fill starts.
    pub fn period(&self) -> YearMonth {
        YearMonth::from_date(self.0)
    }
}

impl From<NaiveDate> for HireDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<HireDate> for NaiveDate {
    fn from(hire: HireDate) -> Self {
        hire.0
    }
}

/// Header information for a leave calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveProfile {
    /// Identifying label, such as a student or employee number.
    #[serde(default)]
    pub identifier: String,
    /// Unit or department the person works for.
    #[serde(default)]
    pub unit: String,
    /// Hourly wage used to value unused leave.
    #[serde(default)]
    pub hourly_wage: Option<Decimal>,
    /// Date of hire.
    #[serde(default)]
    pub hire_date: Option<HireDate>,
}

impl LeaveProfile {
    /// The wage to value leave with, or `None` when not positive.
    pub fn effective_wage(&self) -> Option<Decimal> {
        self.hourly_wage.filter(|wage| *wage > Decimal::ZERO)
    }

    /// Sets the wage from user text. Unparseable or blank text clears it.
    pub fn set_wage_text(&mut self, text: &str) {
        self.hourly_wage = Decimal::from_str(text.trim()).ok();
    }

    /// The identifier with surrounding whitespace removed.
    pub fn trimmed_identifier(&self) -> &str {
        self.identifier.trim()
    }

    /// The unit with surrounding whitespace removed.
    pub fn trimmed_unit(&self) -> &str {
        self.unit.trim()
    }
}
