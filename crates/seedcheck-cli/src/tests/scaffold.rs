// crates/seedcheck-cli/src/tests/scaffold.rs
// ============================================================================
// Module: Scaffold Unit Tests
// Description: Validate generated battery skeletons.
// Purpose: Ensure skeletons satisfy the authoring rules they target.
// Dependencies: seedcheck-cli, seedcheck-config, seedcheck-core, serde_json
// ============================================================================

//! ## Overview
//! Unit tests for battery skeleton generation.

use seedcheck_config::AuthoringConfig;
use seedcheck_core::CaseBattery;
use seedcheck_core::CaseKind;
use seedcheck_core::EntrypointId;

use crate::scaffold::scaffold_battery;

/// Verifies the default skeleton validates against the default rules.
#[test]
fn default_skeleton_validates() {
    let authoring = AuthoringConfig::default();
    let battery = scaffold_battery(EntrypointId::new("sum"), &authoring);

    assert_eq!(battery.cases.len(), authoring.min_cases);
    battery
        .validate_with_bounds(
            authoring.min_cases,
            authoring.max_cases,
            authoring.require_invalid_input_case,
        )
        .unwrap();
}

/// Verifies the skeleton covers every authoring slot kind.
#[test]
fn skeleton_covers_authoring_slots() {
    let battery = scaffold_battery(EntrypointId::new("sum"), &AuthoringConfig::default());

    let kinds: Vec<CaseKind> = battery.cases.iter().map(|case| case.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CaseKind::Normal,
            CaseKind::Normal,
            CaseKind::EdgeCase,
            CaseKind::LargeInput,
            CaseKind::InvalidInput,
        ]
    );
}

/// Verifies the final case expects an error.
#[test]
fn final_case_expects_error() {
    let battery = scaffold_battery(EntrypointId::new("concat"), &AuthoringConfig::default());
    let last = battery.cases.last().unwrap();

    assert_eq!(last.kind, CaseKind::InvalidInput);
    assert!(last.expected.is_error());
}

/// Verifies case identifiers are unique and ordered.
#[test]
fn case_ids_are_unique_and_ordered() {
    let battery = scaffold_battery(EntrypointId::new("sum"), &AuthoringConfig::default());

    let ids: Vec<&str> = battery.cases.iter().map(|case| case.case_id.as_str()).collect();
    assert_eq!(ids, vec!["case-001", "case-002", "case-003", "case-004", "case-005"]);
}

/// Verifies the skeleton round-trips through battery JSON.
#[test]
fn skeleton_round_trips_through_json() {
    let battery = scaffold_battery(EntrypointId::new("sum"), &AuthoringConfig::default());

    let bytes = serde_json::to_vec(&battery).unwrap();
    let parsed = CaseBattery::from_json_bytes(&bytes).unwrap();
    assert_eq!(parsed, battery);
}

/// Verifies larger minimums pad with normal cases.
#[test]
fn larger_minimum_pads_with_normal_cases() {
    let authoring = AuthoringConfig {
        min_cases: 8,
        max_cases: 10,
        require_invalid_input_case: true,
    };
    let battery = scaffold_battery(EntrypointId::new("sum"), &authoring);

    assert_eq!(battery.cases.len(), 8);
    let normal = battery.cases.iter().filter(|case| case.kind == CaseKind::Normal).count();
    assert_eq!(normal, 5);
    assert!(battery.has_invalid_input_case());
}
