// crates/seedcheck-core/src/core/battery.rs
// ============================================================================
// Module: Seedcheck Case Battery
// Description: Ordered case batteries and authoring-rule validation.
// Purpose: Enforce battery structure before any case is executed.
// Dependencies: crate::core::{case, identifiers}, serde, serde_json
// ============================================================================

//! ## Overview
//! A battery is the ordered sequence of cases executed against one
//! entrypoint. Authoring rules bound the case count, require unique case
//! identifiers, and require at least one invalid-input case that designates
//! an error outcome. Declaration order is execution order.
//!
//! Battery files are untrusted inputs: loading enforces a size limit and
//! fails closed on malformed JSON.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::case::CaseKind;
use crate::core::case::TestCase;
use crate::core::identifiers::EntrypointId;

// ============================================================================
// SECTION: Authoring Limits
// ============================================================================

/// Minimum number of cases in a battery per the authoring rule.
pub const MIN_CASES: usize = 5;
/// Maximum number of cases in a battery per the authoring rule.
pub const MAX_CASES: usize = 10;
/// Maximum size of a battery file in bytes.
pub const MAX_BATTERY_FILE_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: Battery
// ============================================================================

/// Ordered battery of assertion cases for one entrypoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseBattery {
    /// Entrypoint the battery targets.
    pub entrypoint_id: EntrypointId,
    /// Cases in declaration (and execution) order.
    pub cases: Vec<TestCase>,
}

impl CaseBattery {
    /// Validates the battery against the default authoring rules.
    ///
    /// # Errors
    ///
    /// Returns [`BatteryError`] when an authoring rule is violated.
    pub fn validate(&self) -> Result<(), BatteryError> {
        self.validate_with_bounds(MIN_CASES, MAX_CASES, true)
    }

    /// Validates the battery against explicit authoring bounds.
    ///
    /// # Errors
    ///
    /// Returns [`BatteryError`] when an authoring rule is violated.
    pub fn validate_with_bounds(
        &self,
        min_cases: usize,
        max_cases: usize,
        require_invalid_input: bool,
    ) -> Result<(), BatteryError> {
        if self.cases.len() < min_cases {
            return Err(BatteryError::TooFewCases {
                count: self.cases.len(),
                min: min_cases,
            });
        }
        if self.cases.len() > max_cases {
            return Err(BatteryError::TooManyCases {
                count: self.cases.len(),
                max: max_cases,
            });
        }
        ensure_unique_case_ids(&self.cases)?;
        ensure_error_expectations_consistent(&self.cases)?;
        if require_invalid_input && !self.has_invalid_input_case() {
            return Err(BatteryError::MissingInvalidInputCase);
        }
        Ok(())
    }

    /// Returns true when the battery holds an invalid-input case expecting an error.
    #[must_use]
    pub fn has_invalid_input_case(&self) -> bool {
        self.cases
            .iter()
            .any(|case| case.kind == CaseKind::InvalidInput && case.expects_error())
    }

    /// Parses and validates a battery from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BatteryError`] when the input exceeds the size limit, is not
    /// valid JSON, or violates an authoring rule.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, BatteryError> {
        if bytes.len() > MAX_BATTERY_FILE_BYTES {
            return Err(BatteryError::FileTooLarge {
                size: bytes.len(),
                limit: MAX_BATTERY_FILE_BYTES,
            });
        }
        let battery: Self =
            serde_json::from_slice(bytes).map_err(|err| BatteryError::Parse(err.to_string()))?;
        battery.validate()?;
        Ok(battery)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Authoring-rule and load errors for case batteries.
#[derive(Debug, Error)]
pub enum BatteryError {
    /// Battery holds fewer cases than the authoring minimum.
    #[error("battery holds {count} cases; authoring rule requires at least {min}")]
    TooFewCases {
        /// Number of cases present.
        count: usize,
        /// Required minimum.
        min: usize,
    },
    /// Battery holds more cases than the authoring maximum.
    #[error("battery holds {count} cases; authoring rule allows at most {max}")]
    TooManyCases {
        /// Number of cases present.
        count: usize,
        /// Allowed maximum.
        max: usize,
    },
    /// Two cases share an identifier.
    #[error("duplicate case identifier: {0}")]
    DuplicateCaseId(String),
    /// No invalid-input case designates an error outcome.
    #[error("battery must hold at least one invalid-input case expecting an error")]
    MissingInvalidInputCase,
    /// An invalid-input case expects a value instead of an error.
    #[error("invalid-input case {0} must expect an error outcome")]
    InvalidInputExpectsValue(String),
    /// Battery file exceeds the size limit.
    #[error("battery file is {size} bytes (limit {limit})")]
    FileTooLarge {
        /// Observed file size in bytes.
        size: usize,
        /// Enforced size limit in bytes.
        limit: usize,
    },
    /// Battery JSON failed to parse.
    #[error("battery parse error: {0}")]
    Parse(String),
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Ensures case identifiers are unique within the battery.
fn ensure_unique_case_ids(cases: &[TestCase]) -> Result<(), BatteryError> {
    for (index, case) in cases.iter().enumerate() {
        if cases.iter().skip(index + 1).any(|other| other.case_id == case.case_id) {
            return Err(BatteryError::DuplicateCaseId(case.case_id.to_string()));
        }
    }
    Ok(())
}

/// Ensures invalid-input cases designate error outcomes.
fn ensure_error_expectations_consistent(cases: &[TestCase]) -> Result<(), BatteryError> {
    for case in cases {
        if case.kind == CaseKind::InvalidInput && !case.expects_error() {
            return Err(BatteryError::InvalidInputExpectsValue(case.case_id.to_string()));
        }
    }
    Ok(())
}
