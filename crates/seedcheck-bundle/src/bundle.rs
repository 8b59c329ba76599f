// crates/seedcheck-bundle/src/bundle.rs
// ============================================================================
// Module: Seed Bundle Builder
// Description: Artifact reading, digesting, and submission record output.
// Purpose: Produce the CSV record and canonical JSON manifest for a seed.
// Dependencies: seedcheck-core, serde, thiserror
// ============================================================================

//! ## Overview
//! Bundling reads the three seed artifacts (prompt, solution, test) under a
//! strict size limit, trims surrounding whitespace, and emits two outputs:
//! a single-record CSV file matching the submission pipeline's expected
//! header, and a canonical JSON manifest carrying SHA-256 digests of each
//! artifact so a bundle can be verified offline.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use seedcheck_core::LanguageId;
use seedcheck_core::SeedId;
use seedcheck_core::hashing::HashError;
use seedcheck_core::hashing::Sha256Digest;
use seedcheck_core::hashing::canonical_json_bytes;
use seedcheck_core::hashing::hash_bytes;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::layout::SeedLayout;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// CSV header for submission records.
const CSV_HEADER: [&str; 6] = ["id", "language", "prompt", "solution", "test", "username"];

// ============================================================================
// SECTION: Bundle Types
// ============================================================================

/// Fully read seed submission bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedBundle {
    /// Seed identifier.
    pub seed_id: SeedId,
    /// Detected language.
    pub language: LanguageId,
    /// Prompt text, trimmed.
    pub prompt: String,
    /// Solution source, trimmed.
    pub solution: String,
    /// Test source, trimmed.
    pub test: String,
    /// Submitting author name.
    pub author: String,
}

/// Digest manifest for one bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleManifest {
    /// Seed identifier.
    pub seed_id: SeedId,
    /// Detected language.
    pub language: LanguageId,
    /// Submitting author name.
    pub author: String,
    /// Digest of the trimmed prompt bytes.
    pub prompt_digest: Sha256Digest,
    /// Digest of the trimmed solution bytes.
    pub solution_digest: Sha256Digest,
    /// Digest of the trimmed test bytes.
    pub test_digest: Sha256Digest,
}

/// Paths written by a bundle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOutputs {
    /// Path of the CSV submission record.
    pub csv_path: PathBuf,
    /// Path of the canonical JSON manifest.
    pub manifest_path: PathBuf,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Bundle construction and output errors.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Artifact could not be read.
    #[error("failed to read {path}: {detail}")]
    Io {
        /// Artifact path.
        path: String,
        /// Underlying I/O detail.
        detail: String,
    },
    /// Artifact exceeds the configured size limit.
    #[error("artifact {path} is {size} bytes (limit {limit})")]
    ArtifactTooLarge {
        /// Artifact path.
        path: String,
        /// Observed size in bytes.
        size: usize,
        /// Enforced limit in bytes.
        limit: usize,
    },
    /// Artifact is not valid UTF-8.
    #[error("artifact {0} must be utf-8 text")]
    NotUtf8(String),
    /// Author name is empty after trimming.
    #[error("author name must not be empty")]
    EmptyAuthor,
    /// Manifest canonicalization failed.
    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] HashError),
    /// Output file could not be written.
    #[error("failed to write {path}: {detail}")]
    Write {
        /// Output path.
        path: String,
        /// Underlying I/O detail.
        detail: String,
    },
}

// ============================================================================
// SECTION: Bundle Building
// ============================================================================

/// Builds a bundle from a discovered layout.
///
/// # Errors
///
/// Returns [`BundleError`] when an artifact is unreadable, oversized, not
/// UTF-8, or when the author name is empty.
pub fn build_bundle(
    layout: &SeedLayout,
    author: &str,
    max_artifact_bytes: usize,
) -> Result<SeedBundle, BundleError> {
    let author = author.trim();
    if author.is_empty() {
        return Err(BundleError::EmptyAuthor);
    }

    Ok(SeedBundle {
        seed_id: layout.seed_id.clone(),
        language: layout.language.clone(),
        prompt: read_artifact(&layout.prompt_path, max_artifact_bytes)?,
        solution: read_artifact(&layout.solution_path, max_artifact_bytes)?,
        test: read_artifact(&layout.test_path, max_artifact_bytes)?,
        author: author.to_string(),
    })
}

/// Computes the digest manifest for a bundle.
#[must_use]
pub fn manifest_for(bundle: &SeedBundle) -> BundleManifest {
    BundleManifest {
        seed_id: bundle.seed_id.clone(),
        language: bundle.language.clone(),
        author: bundle.author.clone(),
        prompt_digest: hash_bytes(bundle.prompt.as_bytes()),
        solution_digest: hash_bytes(bundle.solution.as_bytes()),
        test_digest: hash_bytes(bundle.test.as_bytes()),
    }
}

/// Writes the CSV record and JSON manifest into the output directory.
///
/// # Errors
///
/// Returns [`BundleError`] when serialization or writing fails.
pub fn write_outputs(bundle: &SeedBundle, output_dir: &Path) -> Result<BundleOutputs, BundleError> {
    let csv_path = output_dir.join(format!("{}.csv", bundle.seed_id));
    let manifest_path = output_dir.join(format!("{}.manifest.json", bundle.seed_id));

    let manifest = manifest_for(bundle);
    let manifest_bytes = canonical_json_bytes(&manifest)?;

    fs::write(&csv_path, csv_record(bundle)).map_err(|err| BundleError::Write {
        path: csv_path.display().to_string(),
        detail: err.to_string(),
    })?;
    fs::write(&manifest_path, manifest_bytes).map_err(|err| BundleError::Write {
        path: manifest_path.display().to_string(),
        detail: err.to_string(),
    })?;

    Ok(BundleOutputs {
        csv_path,
        manifest_path,
    })
}

// ============================================================================
// SECTION: CSV Record
// ============================================================================

/// Renders the single-record CSV payload for a bundle.
///
/// All fields are quoted and embedded quotes are doubled, matching the
/// submission pipeline's reader.
#[must_use]
pub fn csv_record(bundle: &SeedBundle) -> String {
    let header = CSV_HEADER.map(quote_field).join(",");
    let row = [
        bundle.seed_id.as_str(),
        bundle.language.as_str(),
        &bundle.prompt,
        &bundle.solution,
        &bundle.test,
        &bundle.author,
    ]
    .map(quote_field)
    .join(",");
    format!("{header}\r\n{row}\r\n")
}

/// Quotes one CSV field, doubling embedded quotes.
fn quote_field(field: &str) -> String {
    let escaped = field.replace('"', "\"\"");
    format!("\"{escaped}\"")
}

// ============================================================================
// SECTION: Artifact Reading
// ============================================================================

/// Reads a UTF-8 artifact under the size limit and trims whitespace.
fn read_artifact(path: &Path, limit: usize) -> Result<String, BundleError> {
    let bytes = fs::read(path).map_err(|err| BundleError::Io {
        path: path.display().to_string(),
        detail: err.to_string(),
    })?;
    if bytes.len() > limit {
        return Err(BundleError::ArtifactTooLarge {
            path: path.display().to_string(),
            size: bytes.len(),
            limit,
        });
    }
    let text = std::str::from_utf8(&bytes)
        .map_err(|_| BundleError::NotUtf8(path.display().to_string()))?;
    Ok(text.trim().to_string())
}
