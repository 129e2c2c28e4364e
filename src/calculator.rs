//! Entry points that run a full calculation against a record store.
//!
//! [`LeaveCalculator`] ties the pieces together in the order the tool uses
//! them: validate every displayed record, select the valid chronological
//! sequence, compute the summary, then project it for the screen or export.
//! Validation failures abort before anything is computed.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::calculation::{ValidationReport, compute_leave_summary, validate_records};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveProfile, LeaveSummary};
use crate::report::{ExportSheet, ScreenReport};
use crate::store::RecordStore;

/// Runs leave calculations with a loaded configuration.
///
/// # Example
///
/// ```
/// use leave_engine::calculator::LeaveCalculator;
/// use leave_engine::models::HireDate;
/// use leave_engine::store::RecordUpdate;
/// use chrono::NaiveDate;
///
/// let calculator = LeaveCalculator::builtin()?;
/// let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
///
/// let mut store = calculator.new_store();
/// store.bulk_fill(Some(&HireDate::new(2024, 1, 1)?), today)?;
/// for index in 0..store.len() {
///     store.apply(RecordUpdate::Hours { index, text: "174".into() })?;
/// }
///
/// let summary = calculator.calculate(&store)?;
/// assert_eq!(summary.total_rounded, rust_decimal::Decimal::from(80));
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LeaveCalculator {
    config: ConfigLoader,
}

impl LeaveCalculator {
    /// Creates a calculator with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self { config }
    }

    /// Creates a calculator with the compiled-in statute tables.
    pub fn builtin() -> EngineResult<Self> {
        Ok(Self::new(ConfigLoader::builtin()?))
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// An empty store using the configured bulk-fill cap.
    pub fn new_store(&self) -> RecordStore {
        RecordStore::with_bulk_fill_limit(self.config.bulk_fill_max_months())
    }

    /// Validates every displayed record without computing anything.
    pub fn validate(&self, store: &RecordStore) -> ValidationReport {
        validate_records(store.records(), self.config.hours_bounds())
    }

    /// Validates the store and computes the leave summary.
    ///
    /// # Errors
    ///
    /// * [`EngineError::EmptyField`] if any record has no hours
    /// * [`EngineError::OutOfRange`] if any record's hours are out of bounds
    /// * [`EngineError::NoData`] if no valid record remains
    pub fn calculate(&self, store: &RecordStore) -> EngineResult<LeaveSummary> {
        let start_time = Instant::now();

        let report = self.validate(store);
        if !report.is_ok() {
            warn!(
                records = report.checked,
                empty = report.empty_count(),
                out_of_range = report.out_of_range_count(),
                "Validation rejected records"
            );
        }
        report.into_result()?;

        let months = store.valid_chronological(self.config.hours_bounds());
        let summary = compute_leave_summary(&months, self.config.config()).inspect_err(|err| {
            warn!(error = %err, "Calculation failed");
        })?;

        info!(
            valid_months = summary.valid_months,
            segments = summary.segments.len(),
            total_rounded = %summary.total_rounded,
            entitled = summary.is_entitled(),
            duration_us = start_time.elapsed().as_micros() as u64,
            "Calculation completed successfully"
        );
        Ok(summary)
    }

    /// Calculates and projects the summary for the result panel.
    pub fn render(&self, store: &RecordStore, profile: &LeaveProfile) -> EngineResult<ScreenReport> {
        let summary = self.calculate(store)?;
        Ok(ScreenReport::from_summary(&summary, profile.effective_wage()))
    }

    /// Calculates and lays out the export sheet.
    ///
    /// # Errors
    ///
    /// As [`calculate`](Self::calculate); an empty store is
    /// [`EngineError::NoData`].
    pub fn export(
        &self,
        store: &RecordStore,
        profile: &LeaveProfile,
        today: NaiveDate,
    ) -> EngineResult<ExportSheet> {
        if store.is_empty() {
            warn!("Nothing to export");
            return Err(EngineError::NoData);
        }

        let summary = self.calculate(store)?;
        let months = store.valid_chronological(self.config.hours_bounds());
        let sheet = ExportSheet::build(profile, &summary, &months, today);

        info!(
            file_name = %sheet.file_name,
            rows = sheet.rows.len(),
            "Export sheet prepared"
        );
        Ok(sheet)
    }
}
