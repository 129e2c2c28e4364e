//! Half-hour rounding for leave entitlements.
//!
//! Entitlements are granted in half-hour units and always rounded up, so a
//! worker never receives less than the prorated amount.

use rust_decimal::Decimal;

/// Tolerance subtracted before rounding up.
///
/// Keeps a value that is a half-hour multiple up to representation error
/// (e.g. `11.9999999999` from a non-terminating division) from being pushed
/// to the next half hour.
pub fn half_hour_epsilon() -> Decimal {
    Decimal::new(1, 9)
}

/// Rounds hours up to the next multiple of 0.5.
///
/// Computes `ceil(value * 2 - ε) / 2`. Values at or below zero round to zero.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::ceil_to_half_hour;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// assert_eq!(ceil_to_half_hour(dec("12.0")), dec("12"));
/// assert_eq!(ceil_to_half_hour(dec("12.01")), dec("12.5"));
/// assert_eq!(ceil_to_half_hour(dec("12.51")), dec("13"));
/// assert_eq!(ceil_to_half_hour(dec("-3")), Decimal::ZERO);
/// ```
pub fn ceil_to_half_hour(value: Decimal) -> Decimal {
    if value <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let rounded = (value * Decimal::TWO - half_hour_epsilon()).ceil() / Decimal::TWO;
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}
