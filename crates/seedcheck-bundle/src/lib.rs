// crates/seedcheck-bundle/src/lib.rs
// ============================================================================
// Module: Seedcheck Bundle Library
// Description: Seed directory discovery and submission bundling.
// Purpose: Turn an authored seed directory into auditable submission records.
// Dependencies: seedcheck-config, seedcheck-core, serde, thiserror
// ============================================================================

//! ## Overview
//! A seed directory holds a problem prompt, one solution module, and its
//! test file. Bundling discovers which configured language the seed uses,
//! reads the three artifacts under strict size limits, and emits a quoted
//! CSV submission record plus a canonical JSON manifest carrying SHA-256
//! digests for audit.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod bundle;
pub mod layout;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use bundle::BundleError;
pub use bundle::BundleManifest;
pub use bundle::BundleOutputs;
pub use bundle::SeedBundle;
pub use bundle::build_bundle;
pub use bundle::csv_record;
pub use bundle::manifest_for;
pub use bundle::write_outputs;
pub use layout::LayoutError;
pub use layout::PROMPT_FILE_NAME;
pub use layout::SeedLayout;
pub use layout::discover_layout;
