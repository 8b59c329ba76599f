// crates/seedcheck-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for Seedcheck configuration. Outputs are deterministic
//! and kept in sync with the config model.

/// Returns a canonical example `seedcheck.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[authoring]
min_cases = 5
max_cases = 10
require_invalid_input_case = true

[limits]
max_battery_bytes = 1048576
max_artifact_bytes = 1048576

[[language]]
id = "cpp"
solution_file = "solution.cpp"
test_extension = ".cpp"

[[language]]
id = "python"
solution_file = "solution.py"
test_extension = ".py"

[[language]]
id = "javascript"
solution_file = "solution.mjs"
test_extension = ".mjs"

[[language]]
id = "java"
solution_file = "Solution.java"
test_extension = ".java"
"#,
    )
}
