// crates/seedcheck-bundle/src/layout.rs
// ============================================================================
// Module: Seed Directory Layout
// Description: Language detection and artifact discovery for seed directories.
// Purpose: Resolve prompt, solution, and test paths before bundling.
// Dependencies: seedcheck-config, seedcheck-core, thiserror
// ============================================================================

//! ## Overview
//! Discovery walks the configured language table in order: the first
//! language whose solution file exists in the seed directory wins. The test
//! file is the first directory entry (in lexicographic order) whose name
//! starts with `test` and carries the language's test extension,
//! case-insensitively. Seed directories are untrusted input; every miss is a
//! hard error naming the path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use seedcheck_config::SeedcheckConfig;
use seedcheck_core::LanguageId;
use seedcheck_core::SeedId;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Prompt filename expected inside every seed directory.
pub const PROMPT_FILE_NAME: &str = "prompt.md";

// ============================================================================
// SECTION: Layout
// ============================================================================

/// Resolved artifact paths for one seed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedLayout {
    /// Seed identifier derived from the directory name.
    pub seed_id: SeedId,
    /// Language detected from the solution filename.
    pub language: LanguageId,
    /// Path to the prompt file.
    pub prompt_path: PathBuf,
    /// Path to the solution file.
    pub solution_path: PathBuf,
    /// Path to the test file.
    pub test_path: PathBuf,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Seed layout discovery errors.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Seed directory is missing or unreadable.
    #[error("seed directory unreadable at {path}: {detail}")]
    Unreadable {
        /// Seed directory path.
        path: String,
        /// Underlying I/O detail.
        detail: String,
    },
    /// Seed directory name does not yield a usable identifier.
    #[error("seed directory name is not a valid seed id: {0}")]
    InvalidSeedId(String),
    /// Prompt file is missing.
    #[error("prompt file not found at {0}")]
    MissingPrompt(String),
    /// No configured language matched a solution file.
    #[error("no solution file found in {0} for any configured language")]
    NoSolutionFile(String),
    /// Solution exists but no matching test file was found.
    #[error("no test file matching test*{extension} found in {path}")]
    MissingTestFile {
        /// Seed directory path.
        path: String,
        /// Test extension that was searched for.
        extension: String,
    },
}

// ============================================================================
// SECTION: Discovery
// ============================================================================

/// Discovers the artifact layout of a seed directory.
///
/// # Errors
///
/// Returns [`LayoutError`] when the directory, prompt, solution, or test
/// file cannot be resolved.
pub fn discover_layout(
    seed_dir: &Path,
    config: &SeedcheckConfig,
) -> Result<SeedLayout, LayoutError> {
    let seed_id = seed_id_from_dir(seed_dir)?;
    let entries = directory_entries(seed_dir)?;

    let prompt_path = seed_dir.join(PROMPT_FILE_NAME);
    if !prompt_path.is_file() {
        return Err(LayoutError::MissingPrompt(prompt_path.display().to_string()));
    }

    for language in &config.languages {
        let solution_path = seed_dir.join(&language.solution_file);
        if !solution_path.is_file() {
            continue;
        }
        let test_name = find_test_file(&entries, &language.solution_file, &language.test_extension)
            .ok_or_else(|| LayoutError::MissingTestFile {
                path: seed_dir.display().to_string(),
                extension: language.test_extension.clone(),
            })?;
        return Ok(SeedLayout {
            seed_id,
            language: language.id.clone(),
            prompt_path,
            solution_path,
            test_path: seed_dir.join(test_name),
        });
    }

    Err(LayoutError::NoSolutionFile(seed_dir.display().to_string()))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Derives the seed identifier from the directory name.
fn seed_id_from_dir(seed_dir: &Path) -> Result<SeedId, LayoutError> {
    seed_dir
        .file_name()
        .map(|name| SeedId::new(name.to_string_lossy()))
        .filter(|id| !id.as_str().is_empty())
        .ok_or_else(|| LayoutError::InvalidSeedId(seed_dir.display().to_string()))
}

/// Reads directory entry names in lexicographic order.
fn directory_entries(seed_dir: &Path) -> Result<Vec<String>, LayoutError> {
    let read_dir = fs::read_dir(seed_dir).map_err(|err| LayoutError::Unreadable {
        path: seed_dir.display().to_string(),
        detail: err.to_string(),
    })?;
    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|err| LayoutError::Unreadable {
            path: seed_dir.display().to_string(),
            detail: err.to_string(),
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Finds the first entry matching `test*<extension>` case-insensitively.
fn find_test_file(entries: &[String], solution_file: &str, extension: &str) -> Option<String> {
    let extension = extension.to_lowercase();
    entries
        .iter()
        .find(|name| {
            let lowered = name.to_lowercase();
            *name != solution_file
                && lowered.starts_with("test")
                && lowered.ends_with(&extension)
        })
        .cloned()
}
