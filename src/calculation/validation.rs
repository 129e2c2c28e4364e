//! Hours validation.
//!
//! Validation scans every displayed record and reports which ones block a
//! calculation. It never mutates records; highlighting the offending cells is
//! up to the caller.

use serde::Serialize;

use crate::config::HoursBounds;
use crate::error::{EngineError, EngineResult};
use crate::models::{HoursEntry, MonthlyRecord, WorkedMonth, YearMonth};

/// Why a record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// No hours entered.
    Empty,
    /// Hours outside the bounds, or not a finite number.
    OutOfRange,
}

/// A single rejected record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Position in display order.
    pub index: usize,
    /// The record's month.
    pub period: YearMonth,
    /// What is wrong with it.
    pub kind: IssueKind,
    /// The hours as entered.
    pub value: String,
}

/// The outcome of validating all displayed records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Number of records scanned.
    pub checked: usize,
    /// Rejected records in display order.
    pub issues: Vec<ValidationIssue>,
    #[serde(skip)]
    bounds: HoursBounds,
}

impl ValidationReport {
    /// True when no record blocks the calculation.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of empty records.
    pub fn empty_count(&self) -> usize {
        self.count(IssueKind::Empty)
    }

    /// Number of out-of-range records.
    pub fn out_of_range_count(&self) -> usize {
        self.count(IssueKind::OutOfRange)
    }

    fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }

    /// Converts the report into a pass/fail result.
    ///
    /// Empty records are reported ahead of out-of-range ones.
    pub fn into_result(self) -> EngineResult<()> {
        let empty = self.empty_count();
        if let Some(first) = self.issues.iter().find(|i| i.kind == IssueKind::Empty) {
            return Err(EngineError::EmptyField {
                count: empty,
                first: first.period,
            });
        }
        if let Some(issue) = self.issues.into_iter().next() {
            return Err(EngineError::OutOfRange {
                period: issue.period,
                value: issue.value,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        Ok(())
    }
}

/// Validates every record in display order.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::validate_records;
/// use leave_engine::config::HoursBounds;
/// use leave_engine::models::{HoursEntry, MonthlyRecord, YearMonth};
///
/// let records = vec![
///     MonthlyRecord { period: YearMonth::new(2024, 2).unwrap(), hours: HoursEntry::parse("160.1") },
///     MonthlyRecord { period: YearMonth::new(2024, 1).unwrap(), hours: HoursEntry::parse("12.02") },
/// ];
///
/// let report = validate_records(&records, HoursBounds::default());
/// assert_eq!(report.out_of_range_count(), 1);
/// assert_eq!(report.issues[0].index, 0);
/// ```
pub fn validate_records(records: &[MonthlyRecord], bounds: HoursBounds) -> ValidationReport {
    let issues = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let kind = match &record.hours {
                HoursEntry::Empty => IssueKind::Empty,
                HoursEntry::Value(hours) if bounds.contains(*hours) => return None,
                HoursEntry::Value(_) | HoursEntry::Unparseable(_) => IssueKind::OutOfRange,
            };
            Some(ValidationIssue {
                index,
                period: record.period,
                kind,
                value: record.hours.display_text(),
            })
        })
        .collect();

    ValidationReport {
        checked: records.len(),
        issues,
        bounds,
    }
}

/// Keeps the records with in-bounds hours, sorted chronologically.
///
/// This is the sequence the accrual engine consumes, independent of how the
/// records are displayed.
pub fn select_valid_records(records: &[MonthlyRecord], bounds: HoursBounds) -> Vec<WorkedMonth> {
    let mut valid: Vec<WorkedMonth> = records
        .iter()
        .filter_map(|record| {
            record
                .hours
                .value()
                .filter(|hours| bounds.contains(*hours))
                .map(|hours| WorkedMonth {
                    period: record.period,
                    hours,
                })
        })
        .collect();
    valid.sort_by_key(|month| month.period);
    valid
}
