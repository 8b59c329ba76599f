// crates/seedcheck-core/src/core/report.rs
// ============================================================================
// Module: Seedcheck Run Report
// Description: Per-case verdicts and whole-run reports.
// Purpose: Capture deterministic harness outcomes for audit and CLI output.
// Dependencies: crate::core::{hashing, identifiers}, serde
// ============================================================================

//! ## Overview
//! A run report records one verdict per executed case in declaration order,
//! plus a canonical digest of the battery that produced it. Reports are
//! append-only snapshots; re-running a pure entrypoint over the same battery
//! yields an identical report.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::hashing::Sha256Digest;
use crate::core::identifiers::CaseId;
use crate::core::identifiers::EntrypointId;

// ============================================================================
// SECTION: Run Status
// ============================================================================

/// Whole-run outcome.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Every assertion passed.
    Passed,
    /// A failing assertion terminated the run.
    Failed,
}

// ============================================================================
// SECTION: Case Verdicts
// ============================================================================

/// Verdict for one executed case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseVerdict {
    /// Case identifier.
    pub case_id: CaseId,
    /// Zero-based position of the case in the battery.
    pub position: usize,
}

// ============================================================================
// SECTION: Run Report
// ============================================================================

/// Report for a completed (all-pass) battery run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Entrypoint the battery targeted.
    pub entrypoint_id: EntrypointId,
    /// Pass verdicts in execution order.
    pub verdicts: Vec<CaseVerdict>,
    /// Canonical digest of the battery that was executed.
    pub battery_digest: Sha256Digest,
    /// Whole-run outcome.
    pub status: RunStatus,
}

impl RunReport {
    /// Returns the number of cases that passed.
    #[must_use]
    pub fn passed_cases(&self) -> usize {
        self.verdicts.len()
    }
}
