// crates/seedcheck-core/src/interfaces/mod.rs
// ============================================================================
// Module: Seedcheck Interfaces
// Description: Solution-agnostic interface for entrypoint invocation.
// Purpose: Define the single contract surface the harness binds to.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! The harness imports exactly one contract from the solution side: an
//! entrypoint callable over positional JSON arguments. The entrypoint's
//! semantics are opaque; the harness only observes its return value or its
//! raised error. Implementations should be pure so repeated invocation over
//! a fixed input yields the same output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Entrypoint Errors
// ============================================================================

/// Error raised by an entrypoint invocation.
///
/// The message is the comparand for error expectations: a case that
/// designates an error outcome passes only when the raised message equals
/// the expected string exactly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EntrypointError {
    /// Error message raised by the entrypoint.
    pub message: String,
}

impl EntrypointError {
    /// Creates a new entrypoint error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// SECTION: Entrypoint
// ============================================================================

/// Opaque callable under test.
///
/// The harness references (never owns) the solution's entrypoint through
/// this trait. Arguments are positional JSON values; the concrete contract
/// is supplied externally per use case.
pub trait Entrypoint {
    /// Invokes the entrypoint with positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`EntrypointError`] when the entrypoint raises. Raising is a
    /// legitimate outcome for invalid-input cases, not a harness fault.
    fn call(&self, args: &[Value]) -> Result<Value, EntrypointError>;
}
