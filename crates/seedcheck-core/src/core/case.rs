// crates/seedcheck-core/src/core/case.rs
// ============================================================================
// Module: Seedcheck Case Model
// Description: Test cases, expectations, and authoring slot kinds.
// Purpose: Provide the canonical assertion-case schema for batteries.
// Dependencies: crate::core::identifiers, serde, serde_json
// ============================================================================

//! ## Overview
//! A test case pairs an argument list with an expectation: either a value
//! compared by strict equality, or a designated error outcome whose message
//! must match exactly. Cases are authored statically, consumed once per run,
//! and never mutated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::identifiers::CaseId;

// ============================================================================
// SECTION: Case Kinds
// ============================================================================

/// Authoring slot a case fills within a battery.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    /// Ordinary scenario coverage.
    Normal,
    /// Boundary-condition input.
    EdgeCase,
    /// Large input with no distinct handling path expected.
    LargeInput,
    /// Invalid input that must raise an error.
    InvalidInput,
}

// ============================================================================
// SECTION: Expectations
// ============================================================================

/// Expected outcome of invoking the entrypoint with a case's arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expectation {
    /// The call must return this value under strict equality.
    Value(Value),
    /// The call must raise an error with exactly this message.
    Error {
        /// Expected error message, compared by exact string equality.
        message: String,
    },
}

impl Expectation {
    /// Returns true when this expectation designates an error outcome.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

// ============================================================================
// SECTION: Test Cases
// ============================================================================

/// A single assertion case within a battery.
///
/// # Invariants
/// - `args` is the positional argument tuple passed to the entrypoint.
/// - `expected` must be comparable via strict equality or designate an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Case identifier, unique within the battery.
    pub case_id: CaseId,
    /// Authoring slot this case fills.
    pub kind: CaseKind,
    /// Positional arguments for the entrypoint invocation.
    pub args: Vec<Value>,
    /// Expected outcome.
    pub expected: Expectation,
}

impl TestCase {
    /// Returns true when this case requires the entrypoint to raise.
    #[must_use]
    pub const fn expects_error(&self) -> bool {
        self.expected.is_error()
    }
}
