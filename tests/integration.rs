//! End-to-end tests for the Leave Accrual Engine.
//!
//! This suite drives the public API the way the calculator tool does:
//! - Filling and editing the monthly record table
//! - Validation of empty and out-of-range hours
//! - Segment proration against the statutory milestones
//! - Screen and spreadsheet projections
//! - Error cases

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use leave_engine::calculator::LeaveCalculator;
use leave_engine::config::ConfigLoader;
use leave_engine::error::EngineError;
use leave_engine::models::{HireDate, LeaveProfile, LeaveSummary, YearMonth};
use leave_engine::report::{ReportBody, ScreenReport};
use leave_engine::store::{RecordStore, RecordUpdate, SortDirection};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_calculator() -> LeaveCalculator {
    let config = ConfigLoader::load("./config/tw_lsa").expect("Failed to load config");
    LeaveCalculator::new(config)
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A store holding `count` months from `hired` with the same hours each.
fn create_store(calculator: &LeaveCalculator, hired: (i32, u32), count: u32, hours: &str) -> RecordStore {
    let hire_date = HireDate::new(hired.0, hired.1, 1).unwrap();
    let last = YearMonth::from_index(hire_date.period().index() + i64::from(count) - 1);
    let today = date(last.year(), last.month(), 1);

    let mut store = calculator.new_store();
    let inserted = store.bulk_fill(Some(&hire_date), today).unwrap();
    assert_eq!(inserted, count as usize);
    fill_hours(&mut store, hours);
    store
}

fn fill_hours(store: &mut RecordStore, hours: &str) {
    for index in 0..store.len() {
        store
            .apply(RecordUpdate::Hours {
                index,
                text: hours.to_string(),
            })
            .unwrap();
    }
}

fn segment_labels(summary: &LeaveSummary) -> Vec<&str> {
    summary.segments.iter().map(|s| s.label.as_str()).collect()
}

fn assert_has_audit_step_with_clause(summary: &LeaveSummary, clause: &str) {
    let found = summary
        .audit_trace
        .steps
        .iter()
        .any(|step| step.clause_ref == clause);
    assert!(
        found,
        "Expected an audit step with clause {}, got {:?}",
        clause,
        summary
            .audit_trace
            .steps
            .iter()
            .map(|s| &s.clause_ref)
            .collect::<Vec<_>>()
    );
}

// =============================================================================
// Accrual Scenarios
// =============================================================================

#[test]
fn test_full_year_at_full_time_hours() {
    let calculator = create_calculator();
    let store = create_store(&calculator, (2023, 1), 12, "174");

    let summary = calculator.calculate(&store).unwrap();

    assert_eq!(summary.valid_months, 12);
    assert_eq!(summary.total_hours, decimal("2088"));
    assert_eq!(segment_labels(&summary), vec!["滿 6 個月", "滿 1 年"]);

    let year = &summary.segments[1];
    assert_eq!(year.hours, decimal("2088"));
    assert_eq!(year.base_hours, decimal("2088"));
    assert_eq!(year.raw, decimal("56"));
    assert_eq!(year.rounded, decimal("56"));

    // Overlapping windows: the first six months also earn the half-year days.
    assert_eq!(summary.segments[0].rounded, decimal("24"));
    assert_eq!(summary.total_rounded, decimal("80"));
}

#[test]
fn test_five_months_is_not_yet_entitled() {
    let calculator = create_calculator();
    let store = create_store(&calculator, (2024, 1), 5, "120");

    let summary = calculator.calculate(&store).unwrap();

    assert_eq!(summary.valid_months, 5);
    assert!(summary.segments.is_empty());
    assert!(!summary.is_entitled());
    assert_eq!(summary.total_rounded, Decimal::ZERO);
    assert_eq!(summary.audit_trace.warnings[0].code, "NOT_YET_ENTITLED");
}

#[test]
fn test_half_year_at_half_time_hours() {
    let calculator = create_calculator();
    let store = create_store(&calculator, (2024, 1), 6, "87");

    let summary = calculator.calculate(&store).unwrap();

    assert_eq!(summary.total_hours, decimal("522"));
    assert_eq!(summary.segments.len(), 1);
    assert_eq!(summary.segments[0].label, "滿 6 個月");
    assert_eq!(summary.segments[0].raw, decimal("12"));
    assert_eq!(summary.segments[0].rounded, decimal("12"));
}

#[test]
fn test_partial_hours_round_up_to_half_hour() {
    let calculator = create_calculator();
    let store = create_store(&calculator, (2024, 1), 6, "40");

    let summary = calculator.calculate(&store).unwrap();

    // 240 x 8 x 3 / 1044 = 5.517...
    let segment = &summary.segments[0];
    assert!(segment.raw > decimal("5.51") && segment.raw < decimal("5.52"));
    assert_eq!(segment.rounded, decimal("6"));
}

#[test]
fn test_later_segments_use_their_own_window() {
    let calculator = create_calculator();
    let mut store = create_store(&calculator, (2021, 1), 24, "100");
    // Second year is worked at full time.
    for month in 1..=12 {
        let period = YearMonth::new(2022, month).unwrap();
        let index = store.position_of(period).unwrap();
        store
            .apply(RecordUpdate::Hours {
                index,
                text: "174".to_string(),
            })
            .unwrap();
    }

    let summary = calculator.calculate(&store).unwrap();

    assert_eq!(segment_labels(&summary), vec!["滿 6 個月", "滿 1 年", "滿 2 年"]);
    let second = &summary.segments[2];
    assert_eq!(second.start, YearMonth::new(2022, 1).unwrap());
    assert_eq!(second.end, YearMonth::new(2022, 12).unwrap());
    assert_eq!(second.rounded, decimal("80"));
    assert_has_audit_step_with_clause(&summary, "38(1)(iii)");
}

#[test]
fn test_long_service_reports_every_milestone() {
    let calculator = create_calculator();
    let store = create_store(&calculator, (2018, 1), 72, "174");

    let summary = calculator.calculate(&store).unwrap();

    assert_eq!(summary.segments.len(), 7);
    assert_eq!(summary.seniority.years, 6);
    assert_eq!(summary.seniority.months, 0);
    // 24 + 56 + 80 + 112 + 112 + 120 + 120
    assert_eq!(summary.total_rounded, decimal("624"));
    assert_has_audit_step_with_clause(&summary, "38(1)(v)");
}

#[test]
fn test_zero_hours_month_counts_toward_seniority() {
    let calculator = create_calculator();
    let store = create_store(&calculator, (2024, 1), 6, "0");

    let summary = calculator.calculate(&store).unwrap();

    assert_eq!(summary.valid_months, 6);
    assert_eq!(summary.segments.len(), 1);
    assert_eq!(summary.segments[0].rounded, Decimal::ZERO);
}

#[test]
fn test_calculation_is_idempotent() {
    let calculator = create_calculator();
    let store = create_store(&calculator, (2022, 3), 30, "93.5");

    let first = calculator.calculate(&store).unwrap();
    let second = calculator.calculate(&store).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn test_display_order_does_not_change_result() {
    let calculator = create_calculator();
    let mut store = create_store(&calculator, (2023, 1), 18, "150");

    let descending = calculator.calculate(&store).unwrap();
    assert_eq!(store.toggle_sort(), SortDirection::Ascending);
    let ascending = calculator.calculate(&store).unwrap();

    assert_eq!(descending, ascending);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_fractional_hours_are_valid() {
    let calculator = create_calculator();
    let store = create_store(&calculator, (2024, 1), 3, "12.02");

    assert!(calculator.validate(&store).is_ok());
    assert_eq!(
        calculator.calculate(&store).unwrap().total_hours,
        decimal("36.06")
    );
}

#[test]
fn test_hours_above_maximum_are_out_of_range() {
    let calculator = create_calculator();
    let mut store = create_store(&calculator, (2024, 1), 3, "100");
    store
        .apply(RecordUpdate::Hours {
            index: 1,
            text: "160.1".to_string(),
        })
        .unwrap();

    let error = calculator.calculate(&store).unwrap_err();
    assert_eq!(error.code(), "OUT_OF_RANGE");
    assert_eq!(calculator.validate(&store).out_of_range_count(), 1);
}

#[test]
fn test_boundary_hours_are_valid() {
    let calculator = create_calculator();
    let mut store = create_store(&calculator, (2024, 1), 2, "0");
    store
        .apply(RecordUpdate::Hours {
            index: 0,
            text: "160".to_string(),
        })
        .unwrap();

    assert!(calculator.calculate(&store).is_ok());
}

#[test]
fn test_negative_and_unparseable_hours_are_out_of_range() {
    let calculator = create_calculator();
    let mut store = create_store(&calculator, (2024, 1), 3, "100");
    store
        .apply(RecordUpdate::Hours {
            index: 0,
            text: "-1".to_string(),
        })
        .unwrap();
    store
        .apply(RecordUpdate::Hours {
            index: 2,
            text: "abc".to_string(),
        })
        .unwrap();

    let report = calculator.validate(&store);
    assert_eq!(report.out_of_range_count(), 2);
    assert!(matches!(
        calculator.calculate(&store),
        Err(EngineError::OutOfRange { .. })
    ));
}

#[test]
fn test_empty_hours_take_precedence() {
    let calculator = create_calculator();
    let mut store = create_store(&calculator, (2024, 1), 4, "100");
    store
        .apply(RecordUpdate::Hours {
            index: 0,
            text: "999".to_string(),
        })
        .unwrap();
    store
        .apply(RecordUpdate::Hours {
            index: 3,
            text: "  ".to_string(),
        })
        .unwrap();

    let error = calculator.calculate(&store).unwrap_err();
    assert_eq!(error.code(), "EMPTY_FIELD");
}

#[test]
fn test_empty_store_has_no_data() {
    let calculator = create_calculator();

    let error = calculator.calculate(&calculator.new_store()).unwrap_err();
    assert_eq!(error.code(), "NO_DATA");
}

// =============================================================================
// Record Table
// =============================================================================

#[test]
fn test_bulk_fill_without_hire_date() {
    let calculator = create_calculator();
    let mut store = calculator.new_store();

    let error = store.bulk_fill(None, date(2024, 6, 1)).unwrap_err();

    assert_eq!(error.code(), "MISSING_HIRE_DATE");
    assert!(store.is_empty());
}

#[test]
fn test_bulk_fill_from_future_month() {
    let calculator = create_calculator();
    let mut store = calculator.new_store();
    let hire_date = HireDate::new(2024, 7, 1).unwrap();

    let error = store.bulk_fill(Some(&hire_date), date(2024, 6, 30)).unwrap_err();

    assert_eq!(error.code(), "FUTURE_START");
    assert!(store.is_empty());
}

#[test]
fn test_bulk_fill_keeps_existing_hours() {
    let calculator = create_calculator();
    let mut store = create_store(&calculator, (2024, 1), 3, "80");

    let inserted = store
        .bulk_fill(Some(&HireDate::new(2023, 11, 20).unwrap()), date(2024, 4, 2))
        .unwrap();

    assert_eq!(inserted, 3);
    assert_eq!(store.len(), 6);
    let january = store.position_of(YearMonth::new(2024, 1).unwrap()).unwrap();
    assert_eq!(store.records()[january].hours.value(), Some(decimal("80")));
}

#[test]
fn test_add_next_follows_latest_month() {
    let calculator = create_calculator();
    let mut store = create_store(&calculator, (2024, 1), 2, "80");

    let added = store.add_next(date(2030, 1, 1));

    assert_eq!(added, YearMonth::new(2024, 3).unwrap());
    assert_eq!(store.records()[0].period, added);
    assert_eq!(
        calculator.calculate(&store).unwrap_err().code(),
        "EMPTY_FIELD"
    );
}

#[test]
fn test_month_edit_to_existing_month_is_rejected() {
    let calculator = create_calculator();
    let mut store = create_store(&calculator, (2024, 1), 3, "80");

    let error = store
        .apply(RecordUpdate::Month { index: 0, month: 1 })
        .unwrap_err();

    assert_eq!(error.code(), "DUPLICATE_PERIOD");
    assert_eq!(store.len(), 3);
}

#[test]
fn test_deleting_a_month_shortens_service() {
    let calculator = create_calculator();
    let mut store = create_store(&calculator, (2024, 1), 6, "100");

    store.delete(0).unwrap();
    let summary = calculator.calculate(&store).unwrap();

    assert_eq!(summary.valid_months, 5);
    assert!(summary.segments.is_empty());
}

// =============================================================================
// Projections
// =============================================================================

#[test]
fn test_screen_report_with_wage() {
    let calculator = create_calculator();
    let store = create_store(&calculator, (2023, 1), 12, "174");
    let mut profile = LeaveProfile::default();
    profile.set_wage_text("190");

    let report: ScreenReport = calculator.render(&store, &profile).unwrap();

    assert_eq!(report.period, "2023-01 ~ 2023-12");
    assert_eq!(report.seniority, "1 年 0 個月");
    match report.body {
        ReportBody::Entitled {
            total,
            total_bonus,
            segments,
        } => {
            assert_eq!(total, "累計總特休：80.00 小時（真實：80.00 小時）");
            assert_eq!(
                total_bonus.as_deref(),
                Some("累計總不休假獎金：15200 元（真實：15200 元）")
            );
            assert_eq!(segments.len(), 2);
        }
        other => panic!("Expected entitled body, got {:?}", other),
    }
}

#[test]
fn test_screen_report_ignores_non_positive_wage() {
    let calculator = create_calculator();
    let store = create_store(&calculator, (2023, 1), 12, "174");
    let mut profile = LeaveProfile::default();
    profile.set_wage_text("0");

    let text = calculator.render(&store, &profile).unwrap().to_string();

    assert!(!text.contains("不休假獎金"));
}

#[test]
fn test_export_sheet_layout() {
    let calculator = create_calculator();
    let store = create_store(&calculator, (2024, 1), 6, "87");
    let profile = LeaveProfile {
        identifier: "B11234567".to_string(),
        unit: "總務處".to_string(),
        hourly_wage: Some(decimal("190")),
        hire_date: Some(HireDate::new(2024, 1, 1).unwrap()),
    };

    let sheet = calculator.export(&store, &profile, date(2024, 7, 5)).unwrap();
    let column = sheet.first_column();

    assert_eq!(sheet.file_name, "時薪特休試算_B11234567_2024-07-05.xlsx");
    assert_eq!(column[0], "累計特休表");
    assert_eq!(column[1], "學號：B11234567");
    assert_eq!(column[3], "服務單位：總務處");
    assert_eq!(column[6], "任職區間：2024-01 ~ 2024-06");
    assert_eq!(column[11], "累計總特休：12.00 小時（真實：12.00 小時）");
    assert_eq!(column[12], "累計總不休假獎金：2280 元（真實：2280 元）");
    // Header row plus one row per valid month.
    assert_eq!(sheet.rows.len(), 16 + 6);
}

#[test]
fn test_export_is_blocked_by_invalid_hours() {
    let calculator = create_calculator();
    let mut store = create_store(&calculator, (2024, 1), 6, "87");
    store
        .apply(RecordUpdate::Hours {
            index: 2,
            text: String::new(),
        })
        .unwrap();

    let result = calculator.export(&store, &LeaveProfile::default(), date(2024, 7, 5));
    assert!(matches!(result, Err(EngineError::EmptyField { .. })));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_loaded_config_matches_builtin() {
    let loaded = ConfigLoader::load("./config/tw_lsa").unwrap();
    let builtin = ConfigLoader::builtin().unwrap();

    assert_eq!(loaded.segments(), builtin.segments());
    assert_eq!(loaded.hours_bounds(), builtin.hours_bounds());
    assert_eq!(loaded.year_base_hours(), builtin.year_base_hours());
    assert_eq!(loaded.minimum_entitled_months(), 6);
    assert_eq!(loaded.statute().code, "LSA-38");
}

#[test]
fn test_missing_config_directory() {
    let result = ConfigLoader::load("./config/does_not_exist");
    assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
}
