// crates/seedcheck-core/src/runtime/mod.rs
// ============================================================================
// Module: Seedcheck Runtime
// Description: Harness execution, strict equality, and builtin entrypoints.
// Purpose: Expose the runtime pieces that execute batteries deterministically.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime executes batteries sequentially and fail-fast. Strict
//! equality is the only comparison the harness performs; builtin reference
//! entrypoints exist so batteries can be exercised end to end without a
//! solution module.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod builtins;
pub mod equality;
pub mod harness;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builtins::BUILTIN_ENTRYPOINT_IDS;
pub use builtins::builtin_entrypoint;
pub use builtins::is_builtin_entrypoint_id;
pub use equality::strict_equals;
pub use harness::Harness;
pub use harness::HarnessFailure;
