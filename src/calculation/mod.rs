//! Calculation logic for the Leave Engine.
//!
//! This module contains the validation of entered hours, selection of the
//! valid chronological sequence, half-hour rounding, per-segment proration,
//! the accrual engine that assembles a summary, and unused-leave bonus
//! valuation.

mod accrual;
mod bonus;
mod rounding;
mod segment;
mod validation;

pub use accrual::compute_leave_summary;
pub use bonus::{calculate_bonus, segment_bonus, total_bonus};
pub use rounding::{ceil_to_half_hour, half_hour_epsilon};
pub use segment::{SegmentCalculation, calculate_segment};
pub use validation::{
    IssueKind, ValidationIssue, ValidationReport, select_valid_records, validate_records,
};
