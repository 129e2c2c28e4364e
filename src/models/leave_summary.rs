//! Leave summary models for the Leave Engine.
//!
//! This module contains the [`LeaveSummary`] type and its associated structures
//! that capture all outputs from an accrual calculation, including per-segment
//! entitlements, totals, seniority, and the audit trace.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::YearMonth;

/// Length of service expressed as whole years and remaining months.
///
/// # Example
///
/// ```
/// use leave_engine::models::Seniority;
///
/// let seniority = Seniority::from_months(27);
/// assert_eq!(seniority.years, 2);
/// assert_eq!(seniority.months, 3);
/// assert_eq!(seniority.to_string(), "2 年 3 個月");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seniority {
    /// Completed years.
    pub years: usize,
    /// Months beyond the completed years (0-11).
    pub months: usize,
}

impl Seniority {
    /// Splits a month count into years and months.
    pub fn from_months(total: usize) -> Self {
        Self {
            years: total / 12,
            months: total % 12,
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 年 {} 個月", self.years, self.months)
    }
}

/// The entitlement earned for one tenure milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentResult {
    /// Milestone label, e.g. "滿 1 年".
    pub label: String,
    /// Statute clause granting the days.
    pub clause_ref: String,
    /// First month of the slice.
    pub start: YearMonth,
    /// Last month of the slice.
    pub end: YearMonth,
    /// Hours worked within the slice.
    pub hours: Decimal,
    /// Full-time hours the slice is prorated against.
    pub base_hours: Decimal,
    /// Statutory days granted for the milestone.
    pub entitlement_days: u32,
    /// Prorated entitlement in hours before rounding.
    pub raw: Decimal,
    /// Entitlement rounded up to the next half hour.
    pub rounded: Decimal,
}

impl SegmentResult {
    /// The covered range, e.g. "2023-01 ~ 2023-12".
    pub fn range_label(&self) -> String {
        format!("{} ~ {}", self.start, self.end)
    }
}

/// Monetary value of unused leave at an hourly wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBonus {
    /// Value of the rounded entitlement.
    pub rounded: Decimal,
    /// Value of the raw entitlement.
    pub raw: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings describe conditions the caller should report, such as not yet
/// having enough months for any entitlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of an accrual calculation.
///
/// A summary is a pure projection of the records it was computed from: it
/// carries no identifiers or timestamps, so computing it twice from the same
/// records yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSummary {
    /// Earliest valid month.
    pub first: YearMonth,
    /// Latest valid month.
    pub last: YearMonth,
    /// Number of valid months.
    pub valid_months: usize,
    /// Sum of hours over all valid months.
    pub total_hours: Decimal,
    /// Service length derived from the valid month count.
    pub seniority: Seniority,
    /// Months required before any leave is granted.
    pub minimum_entitled_months: usize,
    /// Milestones reached, in table order.
    pub segments: Vec<SegmentResult>,
    /// Sum of raw segment entitlements.
    pub total_raw: Decimal,
    /// Sum of rounded segment entitlements.
    pub total_rounded: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl LeaveSummary {
    /// The service period, e.g. "2023-01 ~ 2024-06".
    pub fn period_label(&self) -> String {
        format!("{} ~ {}", self.first, self.last)
    }

    /// Whether enough months were worked for any leave to be granted.
    pub fn is_entitled(&self) -> bool {
        self.valid_months >= self.minimum_entitled_months
    }
}
