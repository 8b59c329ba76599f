//! Layout discovery tests for seedcheck-bundle.
// crates/seedcheck-bundle/tests/layout_discovery.rs
// =============================================================================
// Module: Layout Discovery Tests
// Description: Validate seed directory artifact resolution.
// Purpose: Ensure language detection and test file matching behave correctly.
// =============================================================================

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::fs;
use std::path::Path;

use seedcheck_bundle::LayoutError;
use seedcheck_bundle::discover_layout;
use seedcheck_config::SeedcheckConfig;
use tempfile::TempDir;

/// Creates a seed directory with the given files.
fn seed_dir(root: &Path, name: &str, files: &[(&str, &str)]) -> std::path::PathBuf {
    let dir = root.join(name);
    fs::create_dir(&dir).unwrap();
    for (file_name, contents) in files {
        fs::write(dir.join(file_name), contents).unwrap();
    }
    dir
}

/// Verifies detection of a python seed.
#[test]
fn discovers_python_seed() {
    let temp = TempDir::new().unwrap();
    let dir = seed_dir(
        temp.path(),
        "seed-0042",
        &[
            ("prompt.md", "# Problem"),
            ("solution.py", "def sum(a, b): return a + b"),
            ("test.py", "from solution import sum"),
        ],
    );

    let layout = discover_layout(&dir, &SeedcheckConfig::default()).unwrap();
    assert_eq!(layout.seed_id.as_str(), "seed-0042");
    assert_eq!(layout.language.as_str(), "python");
    assert!(layout.solution_path.ends_with("solution.py"));
    assert!(layout.test_path.ends_with("test.py"));
}

/// Verifies the first configured language wins when multiple match.
#[test]
fn earliest_configured_language_wins() {
    let temp = TempDir::new().unwrap();
    let dir = seed_dir(
        temp.path(),
        "seed-multi",
        &[
            ("prompt.md", "# Problem"),
            ("solution.cpp", "int sum(int a, int b);"),
            ("test.cpp", "#include \"solution.cpp\""),
            ("solution.py", "def sum(a, b): return a + b"),
            ("test.py", "from solution import sum"),
        ],
    );

    let layout = discover_layout(&dir, &SeedcheckConfig::default()).unwrap();
    assert_eq!(layout.language.as_str(), "cpp");
}

/// Verifies test file matching is case-insensitive.
#[test]
fn test_file_match_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let dir = seed_dir(
        temp.path(),
        "seed-java",
        &[
            ("prompt.md", "# Problem"),
            ("Solution.java", "class Solution {}"),
            ("TestSolution.java", "class TestSolution {}"),
        ],
    );

    let layout = discover_layout(&dir, &SeedcheckConfig::default()).unwrap();
    assert_eq!(layout.language.as_str(), "java");
    assert!(layout.test_path.ends_with("TestSolution.java"));
}

/// Verifies the solution file itself is never taken as the test file.
#[test]
fn solution_file_is_not_a_test_candidate() {
    let temp = TempDir::new().unwrap();
    let dir = seed_dir(
        temp.path(),
        "seed-no-test",
        &[
            ("prompt.md", "# Problem"),
            ("solution.py", "def sum(a, b): return a + b"),
        ],
    );

    let error = discover_layout(&dir, &SeedcheckConfig::default()).unwrap_err();
    assert!(matches!(error, LayoutError::MissingTestFile { .. }));
}

/// Verifies a missing prompt is rejected before language detection.
#[test]
fn missing_prompt_is_rejected() {
    let temp = TempDir::new().unwrap();
    let dir = seed_dir(
        temp.path(),
        "seed-no-prompt",
        &[
            ("solution.py", "def sum(a, b): return a + b"),
            ("test.py", "from solution import sum"),
        ],
    );

    let error = discover_layout(&dir, &SeedcheckConfig::default()).unwrap_err();
    assert!(matches!(error, LayoutError::MissingPrompt(_)));
}

/// Verifies a directory with no known solution file is rejected.
#[test]
fn unknown_language_is_rejected() {
    let temp = TempDir::new().unwrap();
    let dir = seed_dir(
        temp.path(),
        "seed-ruby",
        &[("prompt.md", "# Problem"), ("solution.rb", "def sum(a, b)")],
    );

    let error = discover_layout(&dir, &SeedcheckConfig::default()).unwrap_err();
    assert!(matches!(error, LayoutError::NoSolutionFile(_)));
}

/// Verifies a nonexistent seed directory is reported as unreadable.
#[test]
fn missing_directory_is_unreadable() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("absent");

    let error = discover_layout(&dir, &SeedcheckConfig::default()).unwrap_err();
    assert!(matches!(error, LayoutError::Unreadable { .. }));
}
