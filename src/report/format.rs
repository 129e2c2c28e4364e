//! Number formatting and the result lines shared by the screen and the
//! spreadsheet.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{LeaveBonus, LeaveSummary, SegmentResult};

/// Formats a value with a fixed number of decimals, rounding halves away
/// from zero.
///
/// # Example
///
/// ```
/// use leave_engine::report::fixed;
/// use rust_decimal::Decimal;
///
/// assert_eq!(fixed(Decimal::new(125, 1), 2), "12.50");
/// assert_eq!(fixed(Decimal::new(23755, 1), 0), "2376");
/// ```
pub fn fixed(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", decimals as usize, rounded)
}

/// Hours with two decimals.
pub fn hours(value: Decimal) -> String {
    fixed(value, 2)
}

/// Currency in whole units.
pub fn currency(value: Decimal) -> String {
    fixed(value, 0)
}

pub(crate) fn not_yet_entitled(summary: &LeaveSummary) -> String {
    format!(
        "有效月份未滿 {} 個月，尚無特休",
        summary.minimum_entitled_months
    )
}

pub(crate) fn total_entitlement_line(summary: &LeaveSummary) -> String {
    format!(
        "累計總特休：{} 小時（真實：{} 小時）",
        hours(summary.total_rounded),
        hours(summary.total_raw)
    )
}

pub(crate) fn total_bonus_line(bonus: &LeaveBonus) -> String {
    format!(
        "累計總不休假獎金：{} 元（真實：{} 元）",
        currency(bonus.rounded),
        currency(bonus.raw)
    )
}

pub(crate) fn segment_heading(segment: &SegmentResult) -> String {
    format!("{}｜{}", segment.range_label(), segment.label)
}

pub(crate) fn segment_entitlement_line(segment: &SegmentResult) -> String {
    format!(
        "本期特休：{} 小時（真實：{} 小時）",
        hours(segment.rounded),
        hours(segment.raw)
    )
}

pub(crate) fn segment_bonus_line(bonus: &LeaveBonus) -> String {
    format!(
        "本期不休假獎金：{} 元（真實：{} 元）",
        currency(bonus.rounded),
        currency(bonus.raw)
    )
}
