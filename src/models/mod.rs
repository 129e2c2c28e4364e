//! Core data models for the Leave Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod leave_summary;
mod monthly_record;
mod profile;
mod year_month;

pub use leave_summary::{
    AuditStep, AuditTrace, AuditWarning, LeaveBonus, LeaveSummary, SegmentResult, Seniority,
};
pub use monthly_record::{HoursEntry, MonthlyRecord, WorkedMonth};
pub use profile::{HireDate, LeaveProfile};
pub use year_month::YearMonth;
