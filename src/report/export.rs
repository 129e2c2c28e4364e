//! Spreadsheet layout of a leave summary.
//!
//! [`ExportSheet`] is the cell grid and file name for the export. Encoding it
//! as an `.xlsx` workbook is left to the caller's spreadsheet writer.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calculation::total_bonus;
use crate::models::{LeaveProfile, LeaveSummary, WorkedMonth};

use super::format::{currency, fixed, not_yet_entitled, total_bonus_line, total_entitlement_line};

/// Prefix of every export file name.
pub const FILE_PREFIX: &str = "時薪特休試算";

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "特休試算";

const MISSING_IDENTIFIER: &str = "未填學號";

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// A text cell.
    Text(String),
    /// A whole-number cell.
    Integer(i64),
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// The cell as display text.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Integer(value) => value.to_string(),
        }
    }
}

/// A single-sheet workbook ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSheet {
    /// Suggested file name, `<prefix>_<identifier>_<YYYY-MM-DD>.xlsx`.
    pub file_name: String,
    /// Worksheet name.
    pub sheet_name: String,
    /// Rows top to bottom; an empty row is a spacer.
    pub rows: Vec<Vec<Cell>>,
}

impl ExportSheet {
    /// Lays out the title, results and detail blocks.
    ///
    /// `months` is the chronological valid sequence the summary was computed
    /// from; it becomes the detail block.
    pub fn build(
        profile: &LeaveProfile,
        summary: &LeaveSummary,
        months: &[WorkedMonth],
        today: NaiveDate,
    ) -> Self {
        let identifier = profile.trimmed_identifier();
        let unit = profile.trimmed_unit();
        let wage = profile.effective_wage();

        let mut rows: Vec<Vec<Cell>> = Vec::new();
        let mut line = |text: String| rows.push(vec![Cell::text(text)]);

        line("累計特休表".to_string());
        line(format!(
            "學號：{}",
            if identifier.is_empty() { "（未填）" } else { identifier }
        ));
        line(format!(
            "時薪：{}",
            wage.map(currency).unwrap_or_else(|| "—".to_string())
        ));
        line(format!(
            "服務單位：{}",
            if unit.is_empty() { "—" } else { unit }
        ));
        rows.push(Vec::new());

        rows.push(vec![Cell::text("試算結果")]);
        rows.push(vec![Cell::text(format!("任職區間：{}", summary.period_label()))]);
        rows.push(vec![Cell::text(format!("有效月份數：{}", summary.valid_months))]);
        rows.push(vec![Cell::text(format!(
            "累計總工時：{} 小時",
            fixed(summary.total_hours, 1)
        ))]);
        rows.push(vec![Cell::text(format!("年資：{}", summary.seniority))]);
        rows.push(Vec::new());

        if summary.is_entitled() {
            rows.push(vec![Cell::text(total_entitlement_line(summary))]);
            if let Some(bonus) = total_bonus(summary, wage) {
                rows.push(vec![Cell::text(total_bonus_line(&bonus))]);
            }
        } else {
            rows.push(vec![Cell::text(not_yet_entitled(summary))]);
        }
        rows.push(Vec::new());

        rows.push(vec![Cell::text("每月工時明細")]);
        rows.push(vec![Cell::text("年"), Cell::text("月"), Cell::text("工時（小時）")]);
        rows.extend(months.iter().map(|month| {
            vec![
                Cell::Integer(i64::from(month.period.year())),
                Cell::Integer(i64::from(month.period.month())),
                Cell::text(fixed(month.hours, 1)),
            ]
        }));

        Self {
            file_name: file_name(identifier, today),
            sheet_name: SHEET_NAME.to_string(),
            rows,
        }
    }

    /// The first cell of every row, as text. Empty rows give empty strings.
    pub fn first_column(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.first().map(Cell::as_text).unwrap_or_default())
            .collect()
    }
}

/// Export file name for an identifier and date.
///
/// # Example
///
/// ```
/// use leave_engine::report::file_name;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// assert_eq!(file_name("B11234567", today), "時薪特休試算_B11234567_2026-10-19.xlsx");
/// assert_eq!(file_name("  ", today), "時薪特休試算_未填學號_2026-10-19.xlsx");
/// ```
pub fn file_name(identifier: &str, today: NaiveDate) -> String {
    let identifier = identifier.trim();
    let identifier = if identifier.is_empty() {
        MISSING_IDENTIFIER
    } else {
        identifier
    };
    format!(
        "{}_{}_{}.xlsx",
        FILE_PREFIX,
        identifier,
        today.format("%Y-%m-%d")
    )
}
