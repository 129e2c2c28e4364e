//! Error types for the Leave Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while editing records, validating
//! input, and computing leave entitlements.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::YearMonth;

/// The main error type for the Leave Engine.
///
/// Every error is detected synchronously and leaves the record store
/// untouched, so callers can surface it to the user and let them retry.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/segments.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/segments.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// One or more displayed records have no hours entered.
    #[error("{count} record(s) have no hours entered (first: {first})")]
    EmptyField {
        /// How many records are empty.
        count: usize,
        /// The earliest displayed record that is empty.
        first: YearMonth,
    },

    /// A record's hours are outside the accepted range or not a number.
    #[error("Hours for {period} are out of range [{min}, {max}]: {value}")]
    OutOfRange {
        /// The month of the offending record.
        period: YearMonth,
        /// The raw value as entered.
        value: String,
        /// Lower bound (inclusive).
        min: Decimal,
        /// Upper bound (inclusive).
        max: Decimal,
    },

    /// There are no valid records to calculate from.
    #[error("No valid monthly records to calculate")]
    NoData,

    /// Bulk-fill was asked to start after the current month.
    #[error("Start month {start} is after the current month {current}")]
    FutureStart {
        /// The requested start month.
        start: YearMonth,
        /// The current month.
        current: YearMonth,
    },

    /// Bulk-fill was invoked without a hire date.
    #[error("A hire date is required before filling months")]
    MissingHireDate,

    /// A hire date does not exist on the calendar.
    #[error("Invalid hire date {year}-{month:02}-{day:02}")]
    InvalidHireDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// A month number outside 1..=12.
    #[error("Invalid month: {month}")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// A record for the month already exists.
    #[error("A record for {period} already exists")]
    DuplicatePeriod {
        /// The month that is already present.
        period: YearMonth,
    },

    /// A display index does not refer to a record.
    #[error("No record at position {index} (store holds {len})")]
    RecordNotFound {
        /// The requested position.
        index: usize,
        /// Number of records in the store.
        len: usize,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but is not usable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },
}

impl EngineError {
    /// Returns a stable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::EmptyField { .. } => "EMPTY_FIELD",
            EngineError::OutOfRange { .. } => "OUT_OF_RANGE",
            EngineError::NoData => "NO_DATA",
            EngineError::FutureStart { .. } => "FUTURE_START",
            EngineError::MissingHireDate => "MISSING_HIRE_DATE",
            EngineError::InvalidHireDate { .. } => "INVALID_HIRE_DATE",
            EngineError::InvalidMonth { .. } => "INVALID_MONTH",
            EngineError::DuplicatePeriod { .. } => "DUPLICATE_PERIOD",
            EngineError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            EngineError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            EngineError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            EngineError::InvalidConfig { .. } => "INVALID_CONFIG",
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
