// crates/seedcheck-config/src/lib.rs
// ============================================================================
// Module: Seedcheck Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for seedcheck.toml semantics.
// Dependencies: seedcheck-core, serde, toml
// ============================================================================

//! ## Overview
//! `seedcheck-config` defines the canonical configuration model for
//! Seedcheck: authoring-rule bounds, the language table used for seed
//! discovery, and artifact size limits. Parsing is strict and fail-closed;
//! config inputs are untrusted.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
