// crates/seedcheck-core/tests/battery.rs
// ============================================================================
// Module: Battery Validation Tests
// Description: Authoring-rule enforcement for case batteries.
// Purpose: Ensure invalid batteries are rejected before any execution.
// Dependencies: seedcheck-core, serde_json
// ============================================================================
//! ## Overview
//! Validates authoring rules: case-count bounds, unique identifiers, the
//! required invalid-input case, and size-limited JSON loading.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use seedcheck_core::BatteryError;
use seedcheck_core::CaseBattery;
use seedcheck_core::CaseKind;
use seedcheck_core::Expectation;
use seedcheck_core::MAX_BATTERY_FILE_BYTES;
use seedcheck_core::TestCase;
use serde_json::json;

/// Builds a value-expectation case with the given id.
fn value_case(id: &str, kind: CaseKind) -> TestCase {
    TestCase {
        case_id: id.into(),
        kind,
        args: vec![json!(1), json!(2)],
        expected: Expectation::Value(json!(3)),
    }
}

/// Builds an invalid-input case expecting an error.
fn error_case(id: &str) -> TestCase {
    TestCase {
        case_id: id.into(),
        kind: CaseKind::InvalidInput,
        args: vec![json!(null)],
        expected: Expectation::Error {
            message: "Invalid argument".to_string(),
        },
    }
}

/// Builds a battery that satisfies all default authoring rules.
fn valid_battery() -> CaseBattery {
    CaseBattery {
        entrypoint_id: "sum".into(),
        cases: vec![
            value_case("basic", CaseKind::Normal),
            value_case("zeroes", CaseKind::Normal),
            value_case("edge", CaseKind::EdgeCase),
            value_case("large", CaseKind::LargeInput),
            error_case("invalid"),
        ],
    }
}

// ============================================================================
// SECTION: Count Bounds
// ============================================================================

/// Verifies batteries below the authoring minimum are rejected.
#[test]
fn battery_below_minimum_is_rejected() {
    let mut battery = valid_battery();
    battery.cases.truncate(4);
    assert!(matches!(
        battery.validate(),
        Err(BatteryError::TooFewCases { count: 4, min: 5 })
    ));
}

/// Verifies batteries above the authoring maximum are rejected.
#[test]
fn battery_above_maximum_is_rejected() {
    let mut battery = valid_battery();
    for index in 0 .. 6 {
        battery.cases.push(value_case(&format!("extra-{index}"), CaseKind::Normal));
    }
    assert!(matches!(
        battery.validate(),
        Err(BatteryError::TooManyCases { count: 11, max: 10 })
    ));
}

/// Verifies explicit bounds override the defaults.
#[test]
fn battery_honors_explicit_bounds() {
    let mut battery = valid_battery();
    battery.cases.truncate(3);
    battery.cases.push(error_case("still-invalid"));
    assert!(battery.validate_with_bounds(2, 4, true).is_ok());
}

// ============================================================================
// SECTION: Structural Rules
// ============================================================================

/// Verifies duplicate case identifiers are rejected.
#[test]
fn duplicate_case_ids_are_rejected() {
    let mut battery = valid_battery();
    battery.cases[1].case_id = "basic".into();
    assert!(matches!(battery.validate(), Err(BatteryError::DuplicateCaseId(id)) if id == "basic"));
}

/// Verifies a battery without an invalid-input error case is rejected.
#[test]
fn missing_invalid_input_case_is_rejected() {
    let mut battery = valid_battery();
    battery.cases[4] = value_case("replacement", CaseKind::Normal);
    assert!(matches!(battery.validate(), Err(BatteryError::MissingInvalidInputCase)));
}

/// Verifies invalid-input cases must designate an error outcome.
#[test]
fn invalid_input_case_expecting_value_is_rejected() {
    let mut battery = valid_battery();
    battery.cases.push(value_case("bad-slot", CaseKind::InvalidInput));
    assert!(matches!(
        battery.validate(),
        Err(BatteryError::InvalidInputExpectsValue(id)) if id == "bad-slot"
    ));
}

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Verifies a valid battery round-trips through JSON loading.
#[test]
fn battery_loads_from_json_bytes() {
    let bytes = serde_json::to_vec(&valid_battery()).unwrap();
    let loaded = CaseBattery::from_json_bytes(&bytes).unwrap();
    assert_eq!(loaded, valid_battery());
}

/// Verifies oversized battery files are refused before parsing.
#[test]
fn oversized_battery_file_is_refused() {
    let bytes = vec![b' '; MAX_BATTERY_FILE_BYTES + 1];
    assert!(matches!(
        CaseBattery::from_json_bytes(&bytes),
        Err(BatteryError::FileTooLarge { .. })
    ));
}

/// Verifies malformed JSON fails closed.
#[test]
fn malformed_battery_json_is_rejected() {
    assert!(matches!(
        CaseBattery::from_json_bytes(b"{not json"),
        Err(BatteryError::Parse(_))
    ));
}
