// crates/seedcheck-core/src/core/mod.rs
// ============================================================================
// Module: Seedcheck Core Types
// Description: Canonical case model and report structures.
// Purpose: Provide stable, serializable types for batteries and run reports.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Seedcheck core types define test cases, case batteries, and run reports.
//! These types are the canonical source of truth for battery files on disk
//! and for any derived surfaces (CLI output, bundle manifests).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod battery;
pub mod case;
pub mod hashing;
pub mod identifiers;
pub mod report;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use battery::BatteryError;
pub use battery::CaseBattery;
pub use battery::MAX_BATTERY_FILE_BYTES;
pub use battery::MAX_CASES;
pub use battery::MIN_CASES;
pub use case::CaseKind;
pub use case::Expectation;
pub use case::TestCase;
pub use hashing::Sha256Digest;
pub use identifiers::CaseId;
pub use identifiers::EntrypointId;
pub use identifiers::LanguageId;
pub use identifiers::SeedId;
pub use report::CaseVerdict;
pub use report::RunReport;
pub use report::RunStatus;
