//! Tenure segment proration.
//!
//! Each segment definition takes its own slice of the chronological valid
//! months and prorates the statutory days against the hours worked in that
//! slice. Segments are evaluated independently, so the "滿 6 個月" and
//! "滿 1 年" milestones both draw on the first months and are both reported.

use rust_decimal::Decimal;

use crate::config::{AccrualConfig, SegmentDefinition};
use crate::models::{AuditStep, SegmentResult, WorkedMonth};

use super::rounding::ceil_to_half_hour;

/// The result of evaluating one segment definition.
#[derive(Debug, Clone)]
pub struct SegmentCalculation {
    /// The entitlement, or `None` when too few months have been worked.
    pub result: Option<SegmentResult>,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Evaluates a segment against the chronological valid months.
///
/// The segment is skipped unless at least `start_index + length` months are
/// present. Otherwise:
///
/// ```text
/// raw     = slice_hours × hours_per_day × entitlement_days / base_hours
/// rounded = ceil_to_half_hour(raw)
/// ```
///
/// # Arguments
///
/// * `months` - Valid months sorted ascending by (year, month)
/// * `definition` - The segment to evaluate
/// * `config` - Supplies baseline hours and hours per day
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calculate_segment;
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::{WorkedMonth, YearMonth};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let months: Vec<WorkedMonth> = (1..=6)
///     .map(|m| WorkedMonth { period: YearMonth::new(2024, m).unwrap(), hours: Decimal::from(87) })
///     .collect();
///
/// let six_months = &loader.segments()[0];
/// let calc = calculate_segment(&months, six_months, loader.config(), 1);
/// let result = calc.result.unwrap();
/// assert_eq!(result.hours, Decimal::from(522));
/// assert_eq!(result.rounded, Decimal::from(12));
/// ```
pub fn calculate_segment(
    months: &[WorkedMonth],
    definition: &SegmentDefinition,
    config: &AccrualConfig,
    step_number: u32,
) -> SegmentCalculation {
    let base_hours = config.base_hours(definition.base);
    let required = definition.required_months();

    if months.len() < required {
        let audit_step = AuditStep {
            step_number,
            rule_id: "leave_segment".to_string(),
            rule_name: definition.label.clone(),
            clause_ref: definition.clause.clone(),
            input: serde_json::json!({
                "valid_months": months.len(),
                "required_months": required
            }),
            output: serde_json::json!({
                "reported": false
            }),
            reasoning: format!(
                "Skipped - {} valid months, {} needed",
                months.len(),
                required
            ),
        };
        return SegmentCalculation {
            result: None,
            audit_step,
        };
    }

    let slice = &months[definition.start_index..required];
    let hours: Decimal = slice.iter().map(|m| m.hours).sum();
    let days = Decimal::from(definition.entitlement_days);
    let raw = hours * config.hours_per_day() * days / base_hours;
    let rounded = ceil_to_half_hour(raw);

    // Bounds were checked above, the slice holds at least one month.
    let start = slice[0].period;
    let end = slice[slice.len() - 1].period;

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_segment".to_string(),
        rule_name: definition.label.clone(),
        clause_ref: definition.clause.clone(),
        input: serde_json::json!({
            "range": format!("{} ~ {}", start, end),
            "hours": hours.normalize().to_string(),
            "base_hours": base_hours.normalize().to_string(),
            "entitlement_days": definition.entitlement_days
        }),
        output: serde_json::json!({
            "reported": true,
            "raw": raw.round_dp(6).normalize().to_string(),
            "rounded": rounded.normalize().to_string()
        }),
        reasoning: format!(
            "{}h / {}h x {}h x {} days = {}h, rounded up to {}h",
            hours.normalize(),
            base_hours.normalize(),
            config.hours_per_day(),
            definition.entitlement_days,
            raw.round_dp(2),
            rounded.normalize()
        ),
    };

    SegmentCalculation {
        result: Some(SegmentResult {
            label: definition.label.clone(),
            clause_ref: definition.clause.clone(),
            start,
            end,
            hours,
            base_hours,
            entitlement_days: definition.entitlement_days,
            raw,
            rounded,
        }),
        audit_step,
    }
}
