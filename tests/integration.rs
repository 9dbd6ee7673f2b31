//! Integration tests for the leave calculator.
//!
//! This test suite covers:
//! - Full-year, single-day and partial-year proration
//! - Leap years and non-calendar leave years
//! - Rounding to the configured precision
//! - Default substitution at every prompt
//! - Rejection of malformed input and end of input
//! - Properties that must hold for any input

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

use leave_calculator::calculation::{calculate_proration, prorate_allowance, round_entitlement};
use leave_calculator::cli::{PromptMode, render, run_session};
use leave_calculator::config::{CalculatorConfig, ConfigLoader};
use leave_calculator::error::LeaveError;
use leave_calculator::input::Prompter;
use leave_calculator::models::{EmploymentPeriod, LeaveAllowance, LeaveYear, ProrationResult};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn allowance(s: &str) -> LeaveAllowance {
    LeaveAllowance::new(dec(s)).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 10, 18)
}

fn run_with(
    input: &str,
    mode: PromptMode,
    config: &CalculatorConfig,
) -> Result<ProrationResult, LeaveError> {
    let mut prompter = Prompter::new(input.as_bytes(), Vec::new());
    run_session(&mut prompter, config, mode, today())
}

fn run(input: &str, mode: PromptMode) -> Result<ProrationResult, LeaveError> {
    run_with(input, mode, &CalculatorConfig::default())
}

fn output_line(input: &str, mode: PromptMode) -> String {
    render(&run(input, mode).unwrap(), false).unwrap()
}

// =============================================================================
// SECTION 1: Proration
// =============================================================================

#[test]
fn test_full_calendar_year_keeps_allowance() {
    let year = LeaveYear::calendar(2026).unwrap();
    let result = calculate_proration(
        &allowance("28"),
        &year,
        &EmploymentPeriod::whole_year(&year),
        2,
    )
    .unwrap();

    assert_eq!(result.leave_year_days, 365);
    assert_eq!(result.entitlement_days, dec("28"));
}

#[test]
fn test_single_day_employment() {
    let year = LeaveYear::calendar(2026).unwrap();
    let day = date(2026, 8, 14);
    let days = prorate_allowance(
        &allowance("28"),
        &year,
        &EmploymentPeriod {
            start: day,
            end: day,
        },
        2,
    )
    .unwrap();

    assert_eq!(days, dec("0.08"));
}

#[test]
fn test_leap_year_length_and_proportion() {
    let common = LeaveYear::calendar(2027).unwrap();
    let leap = LeaveYear::calendar(2028).unwrap();
    assert_eq!(leap.length_days(), 366);

    let common_day = calculate_proration(
        &allowance("28"),
        &common,
        &EmploymentPeriod {
            start: date(2027, 5, 1),
            end: date(2027, 5, 1),
        },
        6,
    )
    .unwrap();
    let leap_day = calculate_proration(
        &allowance("28"),
        &leap,
        &EmploymentPeriod {
            start: date(2028, 5, 1),
            end: date(2028, 5, 1),
        },
        6,
    )
    .unwrap();

    assert!(leap_day.entitlement_days < common_day.entitlement_days);
}

#[test]
fn test_rounding_uses_exactly_configured_places() {
    assert_eq!(
        output_line("28\n2026-07-03\n2026-12-31\n", PromptMode::Employment),
        "13.96 days annual leave"
    );

    let config = CalculatorConfig {
        rounding_precision: 4,
        ..CalculatorConfig::default()
    };
    let result = run_with("28\n2026-07-03\n2026-12-31\n", PromptMode::Employment, &config).unwrap();
    assert_eq!(result.to_string(), "13.9616 days annual leave");
}

#[test]
fn test_exact_midpoint_entitlement_rounds_up() {
    // 1.825 x 1 / 365 = 0.005 exactly
    let year = LeaveYear::calendar(2026).unwrap();
    let day = date(2026, 3, 1);
    let result = calculate_proration(
        &allowance("1.825"),
        &year,
        &EmploymentPeriod {
            start: day,
            end: day,
        },
        2,
    )
    .unwrap();

    assert_eq!(result.to_string(), "0.01 days annual leave");
}

#[test]
fn test_out_of_range_employment_is_not_clamped() {
    let result = run("28\n2025-07-01\n2026-12-31\n", PromptMode::Employment).unwrap();

    // 2025-07-01 to 2026-12-31 is 549 days
    assert_eq!(result.employed_days, 549);
    assert!(result.proportion > Decimal::ONE);
    assert!(result.has_warnings());
    assert_eq!(result.formatted_entitlement(), "42.12");
}

// =============================================================================
// SECTION 2: Defaults
// =============================================================================

#[test]
fn test_empty_answers_match_typed_defaults() {
    let defaulted = run("\n\n\n", PromptMode::Employment).unwrap();
    let typed = run("28\n2026-01-01\n2026-12-31\n", PromptMode::Employment).unwrap();
    assert_eq!(defaulted, typed);
}

#[test]
fn test_each_prompt_defaults_independently() {
    let typed = run("20\n2026-03-01\n2026-12-31\n", PromptMode::Employment).unwrap();

    let default_finish = run("20\n2026-03-01\n\n", PromptMode::Employment).unwrap();
    assert_eq!(default_finish, typed);

    let default_allowance = run("\n2026-03-01\n2026-12-31\n", PromptMode::Employment).unwrap();
    assert_eq!(default_allowance.allowance, allowance("28"));
    assert_eq!(default_allowance.employed_days, typed.employed_days);
}

#[test]
fn test_leave_year_mode_empty_answers_match_typed_defaults() {
    let defaulted = run("\n\n\n", PromptMode::LeaveYear).unwrap();
    let typed = run("28\n2026-01-01\n2026-12-31\n", PromptMode::LeaveYear).unwrap();
    assert_eq!(defaulted, typed);
    assert_eq!(defaulted.to_string(), "28.00 days annual leave");
}

#[test]
fn test_config_file_changes_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"statutory_allowance_days: 33\nleave_year_start:\n  month: 9\n  day: 1\n")
        .unwrap();
    let loader = ConfigLoader::load(file.path()).unwrap();

    let result = run_with("\n\n\n", PromptMode::Employment, loader.config()).unwrap();
    assert_eq!(result.leave_year.start(), date(2026, 9, 1));
    assert_eq!(result.leave_year.end(), date(2027, 8, 31));
    assert_eq!(result.to_string(), "33.00 days annual leave");
}

// =============================================================================
// SECTION 3: Rejected and interrupted input
// =============================================================================

#[test]
fn test_malformed_allowance_is_rejected() {
    let err = run("twenty\n\n\n", PromptMode::Employment).unwrap_err();
    assert!(matches!(err, LeaveError::InvalidInput { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_negative_allowance_is_rejected() {
    let err = run("-28\n\n\n", PromptMode::Employment).unwrap_err();
    assert_eq!(err.to_string(), "Invalid allowance '-28': cannot be negative");
}

#[test]
fn test_malformed_finish_date_is_rejected() {
    let err = run("\n\n31/12/2026\n", PromptMode::LeaveYear).unwrap_err();
    match err {
        LeaveError::InvalidInput { field, input, .. } => {
            assert_eq!(field, "finish date");
            assert_eq!(input, "31/12/2026");
        }
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_end_of_input_exits_cleanly() {
    for input in ["", "28\n", "28\n2026-01-01\n"] {
        let err = run(input, PromptMode::Employment).unwrap_err();
        assert!(matches!(err, LeaveError::Interrupted), "input {:?}", input);
        assert_eq!(err.exit_code(), 0);
    }
}

// =============================================================================
// SECTION 4: Properties
// =============================================================================

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=365).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal).unwrap()
    })
}

fn arb_allowance() -> impl Strategy<Value = LeaveAllowance> {
    (0i64..100_000, 0u32..4).prop_map(|(units, scale)| {
        LeaveAllowance::new(Decimal::new(units, scale)).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_calculation_is_idempotent(
        allowance in arb_allowance(),
        year_start in arb_date(),
        start in arb_date(),
        end in arb_date(),
        precision in 0u32..6,
    ) {
        let year = LeaveYear::starting_on(year_start).unwrap();
        let employment = EmploymentPeriod { start, end };
        let first = calculate_proration(&allowance, &year, &employment, precision).unwrap();
        let second = calculate_proration(&allowance, &year, &employment, precision).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_whole_leave_year_keeps_allowance(
        allowance in arb_allowance(),
        year_start in arb_date(),
    ) {
        let year = LeaveYear::starting_on(year_start).unwrap();
        let whole_year = EmploymentPeriod::whole_year(&year);
        let days = prorate_allowance(&allowance, &year, &whole_year, 2).unwrap();
        prop_assert_eq!(days, round_entitlement(allowance.days(), 2));
    }

    #[test]
    fn prop_entitlement_within_bounds_inside_leave_year(
        allowance in arb_allowance(),
        year_start in arb_date(),
        first_offset in 0i64..365,
        length in 0i64..365,
    ) {
        let year = LeaveYear::starting_on(year_start).unwrap();
        let start = year.start() + chrono::Duration::days(first_offset);
        let end = (start + chrono::Duration::days(length)).min(year.end());
        prop_assume!(start <= year.end());

        let employment = EmploymentPeriod { start, end };
        let result = calculate_proration(&allowance, &year, &employment, 2).unwrap();
        prop_assert!(result.entitlement_days >= Decimal::ZERO);
        prop_assert!(result.entitlement_days <= round_entitlement(allowance.days(), 2));
        prop_assert!(!result.has_warnings());
    }

    #[test]
    fn prop_longer_employment_never_earns_less(
        allowance in arb_allowance(),
        start in arb_date(),
        length in 0i64..400,
        extra in 1i64..30,
    ) {
        let year = LeaveYear::starting_on(start).unwrap();
        let shorter = EmploymentPeriod { start, end: start + chrono::Duration::days(length) };
        let longer = EmploymentPeriod { start, end: shorter.end + chrono::Duration::days(extra) };

        let a = prorate_allowance(&allowance, &year, &shorter, 2).unwrap();
        let b = prorate_allowance(&allowance, &year, &longer, 2).unwrap();
        prop_assert!(b >= a);
    }

    #[test]
    fn prop_output_has_exactly_precision_places(
        allowance in arb_allowance(),
        start in arb_date(),
        length in 0i64..365,
        precision in 1u32..6,
    ) {
        let year = LeaveYear::starting_on(start).unwrap();
        let employment = EmploymentPeriod { start, end: start + chrono::Duration::days(length) };
        let result = calculate_proration(&allowance, &year, &employment, precision).unwrap();

        let formatted = result.formatted_entitlement();
        let (_, fraction) = formatted.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), precision as usize);
    }
}
