//! Monthly hours record models.
//!
//! A [`MonthlyRecord`] is one row of the hours table as the user edits it.
//! A [`WorkedMonth`] is a record that passed validation and can be fed to the
//! accrual engine.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::YearMonth;

/// The hours cell of a record as entered.
///
/// # Example
///
/// ```
/// use leave_engine::models::HoursEntry;
/// use rust_decimal::Decimal;
///
/// assert_eq!(HoursEntry::parse("  "), HoursEntry::Empty);
/// assert_eq!(HoursEntry::parse("12.5"), HoursEntry::Value(Decimal::new(125, 1)));
/// assert!(matches!(HoursEntry::parse("abc"), HoursEntry::Unparseable(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum HoursEntry {
    /// Nothing entered yet.
    #[default]
    Empty,
    /// A numeric value. Range checks happen during validation.
    Value(Decimal),
    /// Text that is not a finite number.
    Unparseable(String),
}

impl HoursEntry {
    /// Parses user text into an hours entry.
    ///
    /// Blank text is [`HoursEntry::Empty`]. Plain and scientific decimal
    /// notation are accepted; anything else (including `NaN` and `Infinity`)
    /// is kept verbatim as [`HoursEntry::Unparseable`].
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return HoursEntry::Empty;
        }
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        match Decimal::from_str(unsigned).or_else(|_| Decimal::from_scientific(unsigned)) {
            Ok(value) => HoursEntry::Value(value),
            Err(_) => HoursEntry::Unparseable(trimmed.to_string()),
        }
    }

    /// The numeric value, if one was entered.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            HoursEntry::Value(value) => Some(*value),
            _ => None,
        }
    }

    /// The entry as the user would see it in the input field.
    pub fn display_text(&self) -> String {
        match self {
            HoursEntry::Empty => String::new(),
            HoursEntry::Value(value) => value.normalize().to_string(),
            HoursEntry::Unparseable(text) => text.clone(),
        }
    }
}

/// One row of the monthly hours table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// The month this row records.
    pub period: YearMonth,
    /// Hours worked in the month, as entered.
    #[serde(default)]
    pub hours: HoursEntry,
}

impl MonthlyRecord {
    /// A record with no hours entered.
    pub fn blank(period: YearMonth) -> Self {
        Self {
            period,
            hours: HoursEntry::Empty,
        }
    }

    /// A record with a numeric hours value.
    pub fn with_hours(period: YearMonth, hours: Decimal) -> Self {
        Self {
            period,
            hours: HoursEntry::Value(hours),
        }
    }
}

/// A validated month of work, ready for the accrual engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedMonth {
    /// The month.
    pub period: YearMonth,
    /// Hours worked, within the configured bounds.
    pub hours: Decimal,
}
