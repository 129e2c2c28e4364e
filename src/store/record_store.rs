//! The monthly record store.
//!
//! [`RecordStore`] owns the hours table. Every mutation keeps the records
//! unique by month and in display order, so a display index handed out by
//! [`RecordStore::records`] stays meaningful until the next mutation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::select_valid_records;
use crate::config::HoursBounds;
use crate::error::{EngineError, EngineResult};
use crate::models::{HireDate, HoursEntry, MonthlyRecord, WorkedMonth, YearMonth};

/// Default cap on months created by a single bulk-fill.
pub const DEFAULT_BULK_FILL_LIMIT: usize = 600;

/// Display order of the records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Newest month first.
    #[default]
    Descending,
    /// Oldest month first.
    Ascending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Descending => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
        }
    }
}

/// A single edit to a displayed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum RecordUpdate {
    /// Change the year of the record at `index`.
    Year {
        /// Display position.
        index: usize,
        /// New year.
        year: i32,
    },
    /// Change the month of the record at `index`.
    Month {
        /// Display position.
        index: usize,
        /// New month (1-12).
        month: u32,
    },
    /// Replace the hours text of the record at `index`.
    Hours {
        /// Display position.
        index: usize,
        /// Hours as typed.
        text: String,
    },
}

impl RecordUpdate {
    fn index(&self) -> usize {
        match self {
            RecordUpdate::Year { index, .. }
            | RecordUpdate::Month { index, .. }
            | RecordUpdate::Hours { index, .. } => *index,
        }
    }
}

/// The in-memory hours table.
///
/// # Example
///
/// ```
/// use leave_engine::models::{HireDate, YearMonth};
/// use leave_engine::store::{RecordStore, RecordUpdate};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let mut store = RecordStore::new();
///
/// let hire = HireDate::new(2024, 1, 8).unwrap();
/// assert_eq!(store.bulk_fill(Some(&hire), today).unwrap(), 6);
///
/// // Newest first by default.
/// assert_eq!(store.records()[0].period, YearMonth::new(2024, 6).unwrap());
///
/// store.apply(RecordUpdate::Hours { index: 0, text: "80".into() }).unwrap();
/// assert_eq!(store.records()[0].hours.value(), Some(rust_decimal::Decimal::from(80)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordStore {
    records: Vec<MonthlyRecord>,
    direction: SortDirection,
    bulk_fill_limit: usize,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// An empty store sorted newest first.
    pub fn new() -> Self {
        Self::with_bulk_fill_limit(DEFAULT_BULK_FILL_LIMIT)
    }

    /// An empty store with a custom bulk-fill cap.
    pub fn with_bulk_fill_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            direction: SortDirection::default(),
            bulk_fill_limit: limit.max(1),
        }
    }

    /// Builds a store from existing records.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicatePeriod`] if two records share a month.
    pub fn from_records(records: Vec<MonthlyRecord>) -> EngineResult<Self> {
        let mut store = Self::new();
        for record in records {
            if store.contains(record.period) {
                return Err(EngineError::DuplicatePeriod {
                    period: record.period,
                });
            }
            store.records.push(record);
        }
        store.resort();
        Ok(store)
    }

    /// Records in display order.
    pub fn records(&self) -> &[MonthlyRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current display order.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Whether a record exists for the month.
    pub fn contains(&self, period: YearMonth) -> bool {
        self.records.iter().any(|r| r.period == period)
    }

    /// Display position of the record for a month.
    pub fn position_of(&self, period: YearMonth) -> Option<usize> {
        self.records.iter().position(|r| r.period == period)
    }

    /// The latest month in the store.
    pub fn latest(&self) -> Option<YearMonth> {
        self.records.iter().map(|r| r.period).max()
    }

    /// Adds a blank record for the month after the latest one.
    ///
    /// An empty store starts at the month containing `today`. Returns the
    /// month that was added.
    pub fn add_next(&mut self, today: NaiveDate) -> YearMonth {
        let period = match self.latest() {
            Some(latest) => latest.next(),
            None => YearMonth::from_date(today),
        };

        self.records.push(MonthlyRecord::blank(period));
        self.resort();
        debug!(period = %period, records = self.records.len(), "Added blank record");
        period
    }

    /// Adds a blank record for every month from the hire month through the
    /// month containing `today`.
    ///
    /// Months already present are left alone. At most the configured limit
    /// of months is generated. Returns how many records were inserted.
    ///
    /// # Errors
    ///
    /// * [`EngineError::MissingHireDate`] when `hire_date` is `None`
    /// * [`EngineError::FutureStart`] when the hire month is after the current month
    ///
    /// The store is unchanged when an error is returned.
    pub fn bulk_fill(&mut self, hire_date: Option<&HireDate>, today: NaiveDate) -> EngineResult<usize> {
        let start = hire_date.ok_or(EngineError::MissingHireDate)?.period();
        let current = YearMonth::from_date(today);

        if start > current {
            return Err(EngineError::FutureStart { start, current });
        }

        let span = (current.index() - start.index() + 1) as usize;
        let count = span.min(self.bulk_fill_limit);

        let mut inserted = 0;
        for offset in 0..count {
            let period = YearMonth::from_index(start.index() + offset as i64);
            if !self.contains(period) {
                self.records.push(MonthlyRecord::blank(period));
                inserted += 1;
            }
        }

        self.resort();
        debug!(
            start = %start,
            current = %current,
            span,
            inserted,
            "Filled months from hire date"
        );
        Ok(inserted)
    }

    /// Removes the record at a display position.
    pub fn delete(&mut self, index: usize) -> EngineResult<MonthlyRecord> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        debug!(period = %removed.period, "Deleted record");
        Ok(removed)
    }

    /// Applies an edit to a displayed record.
    ///
    /// # Errors
    ///
    /// * [`EngineError::RecordNotFound`] for an index past the end
    /// * [`EngineError::InvalidMonth`] for a month outside 1-12
    /// * [`EngineError::DuplicatePeriod`] when the new month already has a record
    pub fn apply(&mut self, update: RecordUpdate) -> EngineResult<()> {
        let index = update.index();
        self.check_index(index)?;
        let current = self.records[index].period;

        match update {
            RecordUpdate::Hours { text, .. } => {
                self.records[index].hours = HoursEntry::parse(&text);
            }
            RecordUpdate::Year { year, .. } => {
                let period = YearMonth::new(year, current.month())?;
                self.move_record(index, period)?;
            }
            RecordUpdate::Month { month, .. } => {
                let period = YearMonth::new(current.year(), month)?;
                self.move_record(index, period)?;
            }
        }
        Ok(())
    }

    /// Flips the display order and returns the new direction.
    pub fn toggle_sort(&mut self) -> SortDirection {
        self.direction = self.direction.toggled();
        self.resort();
        self.direction
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Valid records in chronological order, ready for the accrual engine.
    pub fn valid_chronological(&self, bounds: HoursBounds) -> Vec<WorkedMonth> {
        select_valid_records(&self.records, bounds)
    }

    fn move_record(&mut self, index: usize, period: YearMonth) -> EngineResult<()> {
        if self.records[index].period == period {
            return Ok(());
        }
        if self.contains(period) {
            return Err(EngineError::DuplicatePeriod { period });
        }
        self.records[index].period = period;
        self.resort();
        Ok(())
    }

    fn check_index(&self, index: usize) -> EngineResult<()> {
        if index >= self.records.len() {
            return Err(EngineError::RecordNotFound {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    fn resort(&mut self) {
        match self.direction {
            SortDirection::Descending => self
                .records
                .sort_by(|a, b| b.period.sort_key().cmp(&a.period.sort_key())),
            SortDirection::Ascending => self.records.sort_by_key(|r| r.period.sort_key()),
        }
    }
}
