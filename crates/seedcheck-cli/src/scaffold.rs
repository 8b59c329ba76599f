// crates/seedcheck-cli/src/scaffold.rs
// ============================================================================
// Module: Battery Scaffolding
// Description: Generates authoring skeletons for new case batteries.
// Purpose: Give seed authors a valid starting battery to fill in.
// Dependencies: seedcheck-config, seedcheck-core, serde_json
// ============================================================================

//! ## Overview
//! Scaffolding produces a battery that already satisfies the authoring rules
//! it will later be validated against: the configured minimum case count,
//! unique case identifiers, and one invalid-input case expecting an error.
//! Authors replace the placeholder arguments and expectations with real ones.

// ============================================================================
// SECTION: Imports
// ============================================================================

use seedcheck_config::AuthoringConfig;
use seedcheck_core::CaseBattery;
use seedcheck_core::CaseId;
use seedcheck_core::CaseKind;
use seedcheck_core::EntrypointId;
use seedcheck_core::Expectation;
use seedcheck_core::TestCase;
use serde_json::Value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Placeholder error message for the scaffolded invalid-input case.
const PLACEHOLDER_ERROR_MESSAGE: &str = "Invalid argument";

// ============================================================================
// SECTION: Scaffolding
// ============================================================================

/// Builds a battery skeleton that passes the given authoring rules.
///
/// The skeleton holds exactly `min_cases` cases. The final case is an
/// invalid-input case expecting an error; the two before it (when the
/// minimum allows) are edge-case and large-input slots, and the rest are
/// normal cases. All placeholder arguments and expected values are `null`.
#[must_use]
pub fn scaffold_battery(entrypoint_id: EntrypointId, authoring: &AuthoringConfig) -> CaseBattery {
    let total = authoring.min_cases.max(1);
    let mut cases = Vec::with_capacity(total);
    for position in 0..total {
        cases.push(TestCase {
            case_id: CaseId::new(format!("case-{:03}", position + 1)),
            kind: kind_for_slot(position, total),
            args: vec![Value::Null],
            expected: expectation_for_slot(position, total),
        });
    }
    CaseBattery {
        entrypoint_id,
        cases,
    }
}

/// Picks the case kind for a scaffold slot.
fn kind_for_slot(position: usize, total: usize) -> CaseKind {
    if position + 1 == total {
        CaseKind::InvalidInput
    } else if position + 2 == total && total >= 4 {
        CaseKind::LargeInput
    } else if position + 3 == total && total >= 5 {
        CaseKind::EdgeCase
    } else {
        CaseKind::Normal
    }
}

/// Picks the expectation for a scaffold slot.
fn expectation_for_slot(position: usize, total: usize) -> Expectation {
    if position + 1 == total {
        Expectation::Error {
            message: PLACEHOLDER_ERROR_MESSAGE.to_string(),
        }
    } else {
        Expectation::Value(Value::Null)
    }
}
