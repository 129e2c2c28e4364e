//! Configuration types for leave accrual.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the statute the configuration implements.
#[derive(Debug, Clone, Deserialize)]
pub struct StatuteMetadata {
    /// Short code for the statute (e.g., "LSA-38").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version or effective date of the rules.
    pub version: String,
    /// URL to the official statute text.
    pub source_url: String,
}

/// Components of the full-time baseline hours.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseHoursParameters {
    /// Working days in a week.
    pub work_days_per_week: u32,
    /// Ordinary hours in a working day. Also converts leave days to hours.
    pub hours_per_day: u32,
    /// Weeks in a year.
    pub weeks_per_year: u32,
    /// Days a 365-day year has beyond whole weeks.
    pub extra_days: u32,
}

impl BaseHoursParameters {
    /// Ordinary hours in a full year.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::config::BaseHoursParameters;
    /// use rust_decimal::Decimal;
    ///
    /// let params = BaseHoursParameters {
    ///     work_days_per_week: 5,
    ///     hours_per_day: 8,
    ///     weeks_per_year: 52,
    ///     extra_days: 1,
    /// };
    /// assert_eq!(params.year_hours(), Decimal::from(2088));
    /// assert_eq!(params.half_year_hours(), Decimal::from(1044));
    /// ```
    pub fn year_hours(&self) -> Decimal {
        let weekly = self.work_days_per_week * self.hours_per_day;
        Decimal::from(weekly * self.weeks_per_year + self.extra_days * self.hours_per_day)
    }

    /// Ordinary hours in half a year.
    pub fn half_year_hours(&self) -> Decimal {
        self.year_hours() / Decimal::TWO
    }
}

/// Inclusive range of hours a single month may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HoursBounds {
    /// Lowest accepted value.
    pub min: Decimal,
    /// Highest accepted value.
    pub max: Decimal,
}

impl HoursBounds {
    /// Whether a value lies within the bounds.
    pub fn contains(&self, hours: Decimal) -> bool {
        hours >= self.min && hours <= self.max
    }
}

impl Default for HoursBounds {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::from(160),
        }
    }
}

/// Numeric parameters from parameters.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AccrualParameters {
    /// Baseline hour derivation.
    pub base_hours: BaseHoursParameters,
    /// Accepted hours per month.
    pub hours_bounds: HoursBounds,
    /// Valid months needed before any leave is granted.
    pub minimum_entitled_months: usize,
    /// Most months a single bulk-fill may create.
    pub bulk_fill_max_months: usize,
}

/// Which baseline a segment is prorated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasePeriod {
    /// A full year of ordinary hours.
    Year,
    /// Half a year of ordinary hours.
    HalfYear,
}

/// A tenure milestone window.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SegmentDefinition {
    /// Milestone label, e.g. "滿 2 年".
    pub label: String,
    /// Statute clause granting the days.
    pub clause: String,
    /// Offset of the first month in the chronological valid sequence.
    pub start_index: usize,
    /// Number of consecutive months consumed.
    pub length: usize,
    /// Baseline the hours are prorated against.
    pub base: BasePeriod,
    /// Statutory days granted.
    pub entitlement_days: u32,
}

impl SegmentDefinition {
    /// Valid months needed for this segment to be reported.
    pub fn required_months(&self) -> usize {
        self.start_index + self.length
    }
}

/// Segment table file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentsConfig {
    /// Segments in reporting order.
    pub segments: Vec<SegmentDefinition>,
}

/// The complete accrual configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a statute configuration directory.
#[derive(Debug, Clone)]
pub struct AccrualConfig {
    metadata: StatuteMetadata,
    parameters: AccrualParameters,
    segments: Vec<SegmentDefinition>,
}

impl AccrualConfig {
    /// Creates a new AccrualConfig, checking it can drive a calculation.
    pub fn new(
        metadata: StatuteMetadata,
        parameters: AccrualParameters,
        segments: Vec<SegmentDefinition>,
    ) -> EngineResult<Self> {
        if segments.is_empty() {
            return Err(invalid("at least one segment is required"));
        }
        if parameters.base_hours.year_hours() <= Decimal::ZERO {
            return Err(invalid("base hours must be positive"));
        }
        if parameters.hours_bounds.min > parameters.hours_bounds.max {
            return Err(invalid("hours_bounds.min exceeds hours_bounds.max"));
        }
        if parameters.bulk_fill_max_months == 0 {
            return Err(invalid("bulk_fill_max_months must be positive"));
        }
        if let Some(segment) = segments.iter().find(|s| s.length == 0) {
            return Err(invalid(&format!("segment '{}' has zero length", segment.label)));
        }

        Ok(Self {
            metadata,
            parameters,
            segments,
        })
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        &self.metadata
    }

    /// Returns the numeric parameters.
    pub fn parameters(&self) -> &AccrualParameters {
        &self.parameters
    }

    /// Returns the segment table.
    pub fn segments(&self) -> &[SegmentDefinition] {
        &self.segments
    }

    /// Returns the accepted hours range.
    pub fn hours_bounds(&self) -> HoursBounds {
        self.parameters.hours_bounds
    }

    /// Ordinary hours in a working day.
    pub fn hours_per_day(&self) -> Decimal {
        Decimal::from(self.parameters.base_hours.hours_per_day)
    }

    /// Baseline hours for a segment base.
    pub fn base_hours(&self, base: BasePeriod) -> Decimal {
        match base {
            BasePeriod::Year => self.parameters.base_hours.year_hours(),
            BasePeriod::HalfYear => self.parameters.base_hours.half_year_hours(),
        }
    }
}

fn invalid(message: &str) -> EngineError {
    EngineError::InvalidConfig {
        message: message.to_string(),
    }
}
