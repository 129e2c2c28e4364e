//! Screen projection of a leave summary.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{segment_bonus, total_bonus};
use crate::models::LeaveSummary;

use super::format::{
    fixed, not_yet_entitled, segment_bonus_line, segment_entitlement_line, segment_heading,
    total_bonus_line, total_entitlement_line,
};

/// The lines shown for one reported segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentBlock {
    /// Covered range and label, e.g. "2024-01 ~ 2024-06｜滿 6 個月".
    pub heading: String,
    /// Rounded and raw entitlement hours.
    pub entitlement: String,
    /// Bonus line when a wage is set.
    pub bonus: Option<String>,
}

/// The result area below the summary fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportBody {
    /// Fewer months than the first milestone.
    NotYetEntitled {
        /// Message shown in place of the entitlements.
        message: String,
    },
    /// At least one milestone reached.
    Entitled {
        /// Aggregate entitlement line.
        total: String,
        /// Aggregate bonus line when a wage is set.
        total_bonus: Option<String>,
        /// Per-segment breakdown in table order.
        segments: Vec<SegmentBlock>,
    },
}

/// Text the result panel displays for a summary.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::compute_leave_summary;
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::{WorkedMonth, YearMonth};
/// use leave_engine::report::{ReportBody, ScreenReport};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let months: Vec<WorkedMonth> = (1..=5)
///     .map(|m| WorkedMonth { period: YearMonth::new(2024, m).unwrap(), hours: Decimal::from(60) })
///     .collect();
/// let summary = compute_leave_summary(&months, loader.config()).unwrap();
///
/// let report = ScreenReport::from_summary(&summary, None);
/// assert_eq!(report.seniority, "0 年 5 個月");
/// assert!(matches!(report.body, ReportBody::NotYetEntitled { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenReport {
    /// Service period, "YYYY-MM ~ YYYY-MM".
    pub period: String,
    /// Valid month count.
    pub valid_months: String,
    /// Total hours with one decimal.
    pub total_hours: String,
    /// Seniority, "<N> 年 <M> 個月".
    pub seniority: String,
    /// Entitlement details or the not-yet-entitled message.
    pub body: ReportBody,
}

impl ScreenReport {
    /// Projects a summary for display. `wage` adds bonus lines when positive.
    pub fn from_summary(summary: &LeaveSummary, wage: Option<Decimal>) -> Self {
        let body = if summary.is_entitled() {
            ReportBody::Entitled {
                total: total_entitlement_line(summary),
                total_bonus: total_bonus(summary, wage).map(|b| total_bonus_line(&b)),
                segments: summary
                    .segments
                    .iter()
                    .map(|segment| SegmentBlock {
                        heading: segment_heading(segment),
                        entitlement: segment_entitlement_line(segment),
                        bonus: segment_bonus(segment, wage).map(|b| segment_bonus_line(&b)),
                    })
                    .collect(),
            }
        } else {
            ReportBody::NotYetEntitled {
                message: format!("{}。", not_yet_entitled(summary)),
            }
        };

        Self {
            period: summary.period_label(),
            valid_months: summary.valid_months.to_string(),
            total_hours: fixed(summary.total_hours, 1),
            seniority: summary.seniority.to_string(),
            body,
        }
    }

    /// The result panel as lines of text.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("任職區間：{}", self.period),
            format!("有效月份數：{}", self.valid_months),
            format!("累計總工時：{} 小時", self.total_hours),
            format!("年資：{}", self.seniority),
        ];

        match &self.body {
            ReportBody::NotYetEntitled { message } => lines.push(message.clone()),
            ReportBody::Entitled {
                total,
                total_bonus,
                segments,
            } => {
                lines.push(total.clone());
                lines.extend(total_bonus.iter().cloned());
                for segment in segments {
                    lines.push(String::new());
                    lines.push(segment.heading.clone());
                    lines.push(segment.entitlement.clone());
                    lines.extend(segment.bonus.iter().cloned());
                }
            }
        }
        lines
    }
}

impl fmt::Display for ScreenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
