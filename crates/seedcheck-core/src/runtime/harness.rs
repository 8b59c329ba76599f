// crates/seedcheck-core/src/runtime/harness.rs
// ============================================================================
// Module: Seedcheck Assertion Harness
// Description: Fail-fast battery execution against one entrypoint.
// Purpose: Produce deterministic pass reports or case-addressed failures.
// Dependencies: crate::{core, interfaces, runtime::equality}, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The harness executes a battery's cases sequentially in declaration order
//! and terminates on the first failing assertion. Each case is independent
//! and stateless: its arguments are handed to the entrypoint directly and
//! the outcome is compared under strict equality or, for designated error
//! cases, by exact error-message equality. There is no retry and no
//! recovery; this is a fail-fast verification tool.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::core::CaseBattery;
use crate::core::CaseVerdict;
use crate::core::Expectation;
use crate::core::RunReport;
use crate::core::RunStatus;
use crate::core::battery::BatteryError;
use crate::core::battery::MAX_CASES;
use crate::core::battery::MIN_CASES;
use crate::core::hashing::HashError;
use crate::core::hashing::hash_canonical_json;
use crate::core::identifiers::CaseId;
use crate::interfaces::Entrypoint;
use crate::runtime::equality::strict_equals;

// ============================================================================
// SECTION: Harness Failures
// ============================================================================

/// Failure that terminated a battery run.
///
/// Every case-addressed variant names the failing case and carries both
/// sides of the mismatch so reports never require re-execution.
#[derive(Debug, Error)]
pub enum HarnessFailure {
    /// Actual output differed from the expected value.
    #[error("case {case_id} (position {position}): expected {expected}, got {actual}")]
    AssertionMismatch {
        /// Failing case identifier.
        case_id: CaseId,
        /// Zero-based position of the case in the battery.
        position: usize,
        /// Value the entrypoint returned.
        actual: Value,
        /// Value the case expected.
        expected: Value,
    },
    /// An invalid-input case returned a value instead of raising.
    #[error("case {case_id} (position {position}): expected error was not thrown; got {returned}")]
    MissingExpectedError {
        /// Failing case identifier.
        case_id: CaseId,
        /// Zero-based position of the case in the battery.
        position: usize,
        /// Value the entrypoint returned instead of raising.
        returned: Value,
    },
    /// The entrypoint raised, but with the wrong message.
    #[error(
        "case {case_id} (position {position}): expected error message `{expected}` differs from \
         raised message `{actual}`"
    )]
    ErrorMessageMismatch {
        /// Failing case identifier.
        case_id: CaseId,
        /// Zero-based position of the case in the battery.
        position: usize,
        /// Message the entrypoint raised.
        actual: String,
        /// Message the case expected.
        expected: String,
    },
    /// The entrypoint raised where a value was expected.
    #[error("case {case_id} (position {position}): entrypoint raised unexpectedly: {message}")]
    UnexpectedError {
        /// Failing case identifier.
        case_id: CaseId,
        /// Zero-based position of the case in the battery.
        position: usize,
        /// Message the entrypoint raised.
        message: String,
    },
    /// Battery failed authoring-rule validation before execution.
    #[error("battery rejected before execution: {0}")]
    InvalidBattery(#[from] BatteryError),
    /// Battery digest computation failed.
    #[error("battery digest failed: {0}")]
    Digest(#[from] HashError),
}

// ============================================================================
// SECTION: Harness
// ============================================================================

/// Executes case batteries against an entrypoint, fail-fast.
#[derive(Debug, Clone, Copy, Default)]
pub struct Harness;

impl Harness {
    /// Creates a harness.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs every case in the battery against the entrypoint, applying the
    /// default authoring bounds.
    ///
    /// Cases execute sequentially in declaration order. The first failing
    /// assertion terminates the run immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessFailure`] naming the failing case, or the battery or
    /// digest error that prevented execution.
    pub fn run<E: Entrypoint + ?Sized>(
        &self,
        battery: &CaseBattery,
        entrypoint: &E,
    ) -> Result<RunReport, HarnessFailure> {
        self.run_with_bounds(battery, entrypoint, MIN_CASES, MAX_CASES, true)
    }

    /// Runs a battery under explicit authoring bounds.
    ///
    /// Callers that validated the battery against configured bounds pass the
    /// same bounds here so validation and execution always agree.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessFailure`] naming the failing case, or the battery or
    /// digest error that prevented execution.
    pub fn run_with_bounds<E: Entrypoint + ?Sized>(
        &self,
        battery: &CaseBattery,
        entrypoint: &E,
        min_cases: usize,
        max_cases: usize,
        require_invalid_input: bool,
    ) -> Result<RunReport, HarnessFailure> {
        battery.validate_with_bounds(min_cases, max_cases, require_invalid_input)?;
        let battery_digest = hash_canonical_json(battery)?;

        let mut verdicts = Vec::with_capacity(battery.cases.len());
        for (position, case) in battery.cases.iter().enumerate() {
            let outcome = entrypoint.call(&case.args);
            match (&case.expected, outcome) {
                (Expectation::Value(expected), Ok(actual)) => {
                    if !strict_equals(&actual, expected) {
                        return Err(HarnessFailure::AssertionMismatch {
                            case_id: case.case_id.clone(),
                            position,
                            actual,
                            expected: expected.clone(),
                        });
                    }
                }
                (Expectation::Value(_), Err(raised)) => {
                    return Err(HarnessFailure::UnexpectedError {
                        case_id: case.case_id.clone(),
                        position,
                        message: raised.message,
                    });
                }
                (
                    Expectation::Error {
                        message: expected,
                    },
                    Err(raised),
                ) => {
                    if raised.message != *expected {
                        return Err(HarnessFailure::ErrorMessageMismatch {
                            case_id: case.case_id.clone(),
                            position,
                            actual: raised.message,
                            expected: expected.clone(),
                        });
                    }
                }
                (
                    Expectation::Error {
                        ..
                    },
                    Ok(returned),
                ) => {
                    return Err(HarnessFailure::MissingExpectedError {
                        case_id: case.case_id.clone(),
                        position,
                        returned,
                    });
                }
            }
            verdicts.push(CaseVerdict {
                case_id: case.case_id.clone(),
                position,
            });
        }

        Ok(RunReport {
            entrypoint_id: battery.entrypoint_id.clone(),
            verdicts,
            battery_digest,
            status: RunStatus::Passed,
        })
    }
}
