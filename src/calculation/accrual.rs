//! The accrual engine.
//!
//! Maps a chronologically sorted sequence of valid months to a
//! [`LeaveSummary`]: service period, seniority, and the entitlement for every
//! tenure milestone reached.

use rust_decimal::Decimal;

use crate::config::AccrualConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, AuditWarning, LeaveSummary, Seniority, WorkedMonth};

use super::segment::calculate_segment;

/// Computes the leave summary for a sequence of valid months.
///
/// `months` must be sorted ascending by (year, month) and contain only
/// in-bounds hours, as produced by
/// [`select_valid_records`](super::select_valid_records).
///
/// Totals are plain sums of the reported segments; each segment is rounded
/// on its own. When fewer than the minimum months are present the summary is
/// still returned, with no segments and a `NOT_YET_ENTITLED` warning.
///
/// # Errors
///
/// Returns [`EngineError::NoData`] when `months` is empty.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::compute_leave_summary;
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::{WorkedMonth, YearMonth};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let months: Vec<WorkedMonth> = (1..=12)
///     .map(|m| WorkedMonth { period: YearMonth::new(2024, m).unwrap(), hours: Decimal::from(174) })
///     .collect();
///
/// let summary = compute_leave_summary(&months, loader.config()).unwrap();
/// assert_eq!(summary.period_label(), "2024-01 ~ 2024-12");
/// assert_eq!(summary.segments.len(), 2);
/// assert_eq!(summary.segments[1].rounded, Decimal::from(56));
/// ```
pub fn compute_leave_summary(
    months: &[WorkedMonth],
    config: &AccrualConfig,
) -> EngineResult<LeaveSummary> {
    debug_assert!(
        months.is_sorted_by_key(|m| m.period),
        "valid months must be in chronological order"
    );

    let (first, last) = match (months.first(), months.last()) {
        (Some(first), Some(last)) => (first.period, last.period),
        _ => return Err(EngineError::NoData),
    };

    let valid_months = months.len();
    let total_hours: Decimal = months.iter().map(|m| m.hours).sum();
    let seniority = Seniority::from_months(valid_months);
    let minimum_entitled_months = config.parameters().minimum_entitled_months;

    let mut steps = Vec::with_capacity(config.segments().len() + 1);
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    steps.push(AuditStep {
        step_number,
        rule_id: "service_period".to_string(),
        rule_name: "Service Period".to_string(),
        clause_ref: "38(1)".to_string(),
        input: serde_json::json!({
            "first": first.to_string(),
            "last": last.to_string(),
            "valid_months": valid_months
        }),
        output: serde_json::json!({
            "total_hours": total_hours.normalize().to_string(),
            "seniority_years": seniority.years,
            "seniority_months": seniority.months
        }),
        reasoning: format!(
            "{} valid months from {} to {} = {}",
            valid_months, first, last, seniority
        ),
    });
    step_number += 1;

    if valid_months < minimum_entitled_months {
        warnings.push(AuditWarning {
            code: "NOT_YET_ENTITLED".to_string(),
            message: format!(
                "Only {} valid months; leave starts after {}",
                valid_months, minimum_entitled_months
            ),
            severity: "low".to_string(),
        });
    }

    let mut segments = Vec::new();
    let mut total_raw = Decimal::ZERO;
    let mut total_rounded = Decimal::ZERO;

    for definition in config.segments() {
        let calculation = calculate_segment(months, definition, config, step_number);
        steps.push(calculation.audit_step);
        step_number += 1;

        if let Some(result) = calculation.result {
            total_raw += result.raw;
            total_rounded += result.rounded;
            segments.push(result);
        }
    }

    Ok(LeaveSummary {
        first,
        last,
        valid_months,
        total_hours,
        seniority,
        minimum_entitled_months,
        segments,
        total_raw,
        total_rounded,
        audit_trace: AuditTrace { steps, warnings },
    })
}
