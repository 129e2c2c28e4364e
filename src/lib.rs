//! Annual Leave Accrual Engine for the Taiwan Labor Standards Act
//!
//! This crate computes proportional annual-leave entitlements from a table of
//! monthly work hours: the months are split into tenure milestones (six
//! months, one year, two years, ...), each milestone's statutory days are
//! prorated against the hours actually worked, and the result is rounded up
//! to the next half hour.

#![warn(missing_docs)]

pub mod calculation;
pub mod calculator;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
