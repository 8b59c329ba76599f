// crates/seedcheck-cli/src/lib.rs
// ============================================================================
// Module: Seedcheck CLI Library
// Description: Shared helpers for the Seedcheck command-line interface.
// Purpose: Provide reusable components (i18n, scaffolding) for the binary and tests.
// Dependencies: seedcheck-config, seedcheck-core, serde_json.
// ============================================================================

//! ## Overview
//! This library module houses shared CLI utilities: the internationalized
//! message catalog and battery scaffolding. The binary entry point
//! (`src/main.rs`) imports these helpers to keep all user-facing output
//! consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;

/// Battery skeleton generation for seed authors.
pub mod scaffold;
