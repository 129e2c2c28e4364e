//! Unused-leave bonus calculation.
//!
//! Unused annual leave is paid out at the hourly wage. The bonus is computed
//! for both the raw and the rounded entitlement, at segment level and in
//! aggregate. No rounding is applied here; reports format currency to whole
//! units.

use rust_decimal::Decimal;

use crate::models::{LeaveBonus, LeaveSummary, SegmentResult};

/// Values an entitlement at an hourly wage.
///
/// Returns `None` unless the wage is positive.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calculate_bonus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// let bonus = calculate_bonus(dec("12.5"), dec("12.31"), Some(dec("190"))).unwrap();
/// assert_eq!(bonus.rounded, dec("2375"));
/// assert_eq!(bonus.raw, dec("2338.9"));
///
/// assert!(calculate_bonus(dec("12.5"), dec("12.31"), Some(Decimal::ZERO)).is_none());
/// ```
pub fn calculate_bonus(rounded: Decimal, raw: Decimal, wage: Option<Decimal>) -> Option<LeaveBonus> {
    let wage = wage.filter(|w| *w > Decimal::ZERO)?;
    Some(LeaveBonus {
        rounded: rounded * wage,
        raw: raw * wage,
    })
}

/// Bonus for a single segment.
pub fn segment_bonus(segment: &SegmentResult, wage: Option<Decimal>) -> Option<LeaveBonus> {
    calculate_bonus(segment.rounded, segment.raw, wage)
}

/// Bonus for the aggregate entitlement of a summary.
pub fn total_bonus(summary: &LeaveSummary, wage: Option<Decimal>) -> Option<LeaveBonus> {
    calculate_bonus(summary.total_rounded, summary.total_raw, wage)
}
