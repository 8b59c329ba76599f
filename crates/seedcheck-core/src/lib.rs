// crates/seedcheck-core/src/lib.rs
// ============================================================================
// Module: Seedcheck Core Library
// Description: Public API surface for the Seedcheck core.
// Purpose: Expose case model, interfaces, and harness runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Seedcheck core provides the case model and assertion harness for
//! validating a single entrypoint function against an authored battery of
//! test cases. Comparison is strict (non-coercive) and execution is
//! fail-fast. The core is solution-agnostic and binds to entrypoints through
//! an explicit interface rather than embedding into solution code.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::Entrypoint;
pub use interfaces::EntrypointError;
pub use runtime::BUILTIN_ENTRYPOINT_IDS;
pub use runtime::Harness;
pub use runtime::HarnessFailure;
pub use runtime::builtin_entrypoint;
pub use runtime::is_builtin_entrypoint_id;
pub use runtime::strict_equals;
