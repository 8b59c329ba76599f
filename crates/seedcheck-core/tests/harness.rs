// crates/seedcheck-core/tests/harness.rs
// ============================================================================
// Module: Assertion Harness Tests
// Description: Fail-fast battery execution coverage.
// Purpose: Ensure the harness enforces strict equality and error expectations.
// Dependencies: seedcheck-core, serde_json
// ============================================================================
//! ## Overview
//! Validates the harness contract: declaration-order execution, fail-fast
//! termination naming the offending case, error-message equality for
//! invalid-input cases, and deterministic reports for pure entrypoints.

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

use seedcheck_core::CaseBattery;
use seedcheck_core::CaseKind;
use seedcheck_core::Entrypoint;
use seedcheck_core::EntrypointError;
use seedcheck_core::Expectation;
use seedcheck_core::Harness;
use seedcheck_core::HarnessFailure;
use seedcheck_core::RunStatus;
use seedcheck_core::TestCase;
use seedcheck_core::builtin_entrypoint;
use serde_json::Value;
use serde_json::json;

/// Builds a case with a strict-equality value expectation.
fn case(id: &str, kind: CaseKind, args: Vec<Value>, expected: Value) -> TestCase {
    TestCase {
        case_id: id.into(),
        kind,
        args,
        expected: Expectation::Value(expected),
    }
}

/// Builds a case expecting an error with the given message.
fn raising_case(id: &str, args: Vec<Value>, message: &str) -> TestCase {
    TestCase {
        case_id: id.into(),
        kind: CaseKind::InvalidInput,
        args,
        expected: Expectation::Error {
            message: message.to_string(),
        },
    }
}

/// Battery exercising the `sum` reference contract end to end.
fn sum_battery() -> CaseBattery {
    CaseBattery {
        entrypoint_id: "sum".into(),
        cases: vec![
            case("basic", CaseKind::Normal, vec![json!(2), json!(3)], json!(5)),
            case("zeroes", CaseKind::Normal, vec![json!(0), json!(0)], json!(0)),
            case("negatives-cancel", CaseKind::EdgeCase, vec![json!(-1), json!(1)], json!(0)),
            case(
                "large-input",
                CaseKind::LargeInput,
                vec![json!(i64::MAX - 1), json!(1)],
                json!(i64::MAX),
            ),
            raising_case("overflow", vec![json!(i64::MAX), json!(1)], "integer overflow"),
            raising_case("null-argument", vec![json!(null), json!(3)], "Invalid argument"),
        ],
    }
}

// ============================================================================
// SECTION: Passing Runs
// ============================================================================

/// Verifies the illustrative sum battery passes end to end.
#[test]
fn sum_battery_passes() {
    let harness = Harness::new();
    let sum = builtin_entrypoint("sum").unwrap();
    let report = harness.run(&sum_battery(), sum.as_ref()).unwrap();

    assert_eq!(report.status, RunStatus::Passed);
    assert_eq!(report.passed_cases(), 6);
    assert_eq!(report.verdicts[0].case_id.as_str(), "basic");
    assert_eq!(report.verdicts[5].position, 5);
}

/// Verifies repeated runs of a pure entrypoint yield identical reports.
#[test]
fn repeated_runs_are_deterministic() {
    let harness = Harness::new();
    let sum = builtin_entrypoint("sum").unwrap();
    let first = harness.run(&sum_battery(), sum.as_ref()).unwrap();
    let second = harness.run(&sum_battery(), sum.as_ref()).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// SECTION: Fail-Fast Behavior
// ============================================================================

/// Verifies a mismatch terminates the run naming the failing case.
#[test]
fn mismatch_fails_fast_with_both_sides() {
    let mut battery = sum_battery();
    battery.cases[1].expected = Expectation::Value(json!(1));

    let harness = Harness::new();
    let sum = builtin_entrypoint("sum").unwrap();
    let failure = harness.run(&battery, sum.as_ref()).unwrap_err();

    match failure {
        HarnessFailure::AssertionMismatch {
            case_id,
            position,
            actual,
            expected,
        } => {
            assert_eq!(case_id.as_str(), "zeroes");
            assert_eq!(position, 1);
            assert_eq!(actual, json!(0));
            assert_eq!(expected, json!(1));
        }
        other => panic!("expected assertion mismatch, got: {other}"),
    }
}

/// Verifies strict equality rejects a float where an integer is expected.
#[test]
fn mismatch_on_coerced_number_form() {
    let mut battery = sum_battery();
    battery.cases[0].expected = Expectation::Value(json!(5.0));

    let harness = Harness::new();
    let sum = builtin_entrypoint("sum").unwrap();
    let failure = harness.run(&battery, sum.as_ref()).unwrap_err();
    assert!(matches!(failure, HarnessFailure::AssertionMismatch { position: 0, .. }));
}

/// Verifies a case expecting an error fails when none is raised.
#[test]
fn missing_expected_error_is_reported() {
    let mut battery = sum_battery();
    battery.cases[4] = raising_case("not-raising", vec![json!(1), json!(2)], "integer overflow");

    let harness = Harness::new();
    let sum = builtin_entrypoint("sum").unwrap();
    let failure = harness.run(&battery, sum.as_ref()).unwrap_err();

    match failure {
        HarnessFailure::MissingExpectedError {
            case_id,
            position,
            returned,
        } => {
            assert_eq!(case_id.as_str(), "not-raising");
            assert_eq!(position, 4);
            assert_eq!(returned, json!(3));
        }
        other => panic!("expected missing-error failure, got: {other}"),
    }
}

/// Verifies raised messages must equal the expected string exactly.
#[test]
fn error_message_mismatch_is_reported() {
    let mut battery = sum_battery();
    battery.cases[5] = raising_case("wrong-message", vec![json!(null), json!(3)], "invalid argument");

    let harness = Harness::new();
    let sum = builtin_entrypoint("sum").unwrap();
    let failure = harness.run(&battery, sum.as_ref()).unwrap_err();

    match failure {
        HarnessFailure::ErrorMessageMismatch {
            actual,
            expected,
            ..
        } => {
            assert_eq!(actual, "Invalid argument");
            assert_eq!(expected, "invalid argument");
        }
        other => panic!("expected message mismatch, got: {other}"),
    }
}

/// Verifies an unexpected raise terminates a value-expectation case.
#[test]
fn unexpected_error_is_reported() {
    let mut battery = sum_battery();
    battery.cases[2] = case("raises", CaseKind::Normal, vec![json!("a"), json!(1)], json!(0));

    let harness = Harness::new();
    let sum = builtin_entrypoint("sum").unwrap();
    let failure = harness.run(&battery, sum.as_ref()).unwrap_err();

    match failure {
        HarnessFailure::UnexpectedError {
            case_id,
            position,
            message,
        } => {
            assert_eq!(case_id.as_str(), "raises");
            assert_eq!(position, 2);
            assert_eq!(message, "Invalid argument");
        }
        other => panic!("expected unexpected-error failure, got: {other}"),
    }
}

// ============================================================================
// SECTION: Pre-Execution Checks
// ============================================================================

/// Verifies invalid batteries are rejected before any case runs.
#[test]
fn invalid_battery_is_rejected_before_execution() {
    /// Entrypoint that records nothing and must never be reached.
    struct Unreachable;

    impl Entrypoint for Unreachable {
        fn call(&self, _args: &[Value]) -> Result<Value, EntrypointError> {
            Err(EntrypointError::new("should not be invoked"))
        }
    }

    let mut battery = sum_battery();
    battery.cases.truncate(2);

    let harness = Harness::new();
    let failure = harness.run(&battery, &Unreachable).unwrap_err();
    assert!(matches!(failure, HarnessFailure::InvalidBattery(_)));
}

/// Verifies custom entrypoint implementations plug into the harness.
#[test]
fn custom_entrypoint_runs_through_harness() {
    /// Reverses a single string argument.
    struct Reverse;

    impl Entrypoint for Reverse {
        fn call(&self, args: &[Value]) -> Result<Value, EntrypointError> {
            let [Value::String(text)] = args else {
                return Err(EntrypointError::new("Invalid argument"));
            };
            Ok(Value::String(text.chars().rev().collect()))
        }
    }

    let battery = CaseBattery {
        entrypoint_id: "reverse".into(),
        cases: vec![
            case("word", CaseKind::Normal, vec![json!("seed")], json!("dees")),
            case("empty", CaseKind::EdgeCase, vec![json!("")], json!("")),
            case("palindrome", CaseKind::Normal, vec![json!("level")], json!("level")),
            case(
                "large-input",
                CaseKind::LargeInput,
                vec![json!("ab".repeat(4096))],
                json!("ba".repeat(4096)),
            ),
            raising_case("not-a-string", vec![json!(7)], "Invalid argument"),
        ],
    };

    let harness = Harness::new();
    let report = harness.run(&battery, &Reverse).unwrap();
    assert_eq!(report.status, RunStatus::Passed);
    assert_eq!(report.passed_cases(), 5);
}

/// Verifies explicit bounds let a battery run that default bounds reject.
#[test]
fn explicit_bounds_govern_execution() {
    let mut battery = sum_battery();
    battery.cases.truncate(3);
    battery.cases.push(raising_case("null-argument", vec![json!(null)], "Invalid argument"));

    let harness = Harness::new();
    let sum = builtin_entrypoint("sum").unwrap();

    let failure = harness.run(&battery, sum.as_ref()).unwrap_err();
    assert!(matches!(failure, HarnessFailure::InvalidBattery(_)));

    let report = harness.run_with_bounds(&battery, sum.as_ref(), 2, 10, true).unwrap();
    assert_eq!(report.status, RunStatus::Passed);
    assert_eq!(report.passed_cases(), 4);
}
