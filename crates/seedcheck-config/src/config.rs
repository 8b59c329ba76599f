// crates/seedcheck-config/src/config.rs
// ============================================================================
// Module: Seedcheck Configuration
// Description: Configuration loading and validation for Seedcheck.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: seedcheck-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! A built-in default configuration is used when no file exists and no
//! explicit path was requested; any malformed or out-of-bounds file fails
//! closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use seedcheck_core::LanguageId;
use seedcheck_core::MAX_BATTERY_FILE_BYTES;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "seedcheck.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "SEEDCHECK_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 256 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Hard cap on the battery case maximum, regardless of configuration.
pub(crate) const HARD_MAX_CASES: usize = 64;
/// Maximum number of language table entries.
pub(crate) const MAX_LANGUAGES: usize = 16;
/// Default minimum battery case count per the authoring rule.
pub(crate) const DEFAULT_MIN_CASES: usize = 5;
/// Default maximum battery case count per the authoring rule.
pub(crate) const DEFAULT_MAX_CASES: usize = 10;
/// Default maximum size of one seed artifact (prompt, solution, test) in bytes.
pub(crate) const DEFAULT_MAX_ARTIFACT_BYTES: usize = 1024 * 1024;
/// Hard cap on the seed artifact size limit.
pub(crate) const MAX_ARTIFACT_BYTES_CAP: usize = 10 * 1024 * 1024;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Seedcheck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedcheckConfig {
    /// Authoring-rule bounds for batteries.
    #[serde(default)]
    pub authoring: AuthoringConfig,
    /// Language table for seed discovery.
    #[serde(default = "default_languages", rename = "language")]
    pub languages: Vec<LanguageConfig>,
    /// Artifact and battery size limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Battery authoring rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoringConfig {
    /// Minimum number of cases in a battery.
    #[serde(default = "default_min_cases")]
    pub min_cases: usize,
    /// Maximum number of cases in a battery.
    #[serde(default = "default_max_cases")]
    pub max_cases: usize,
    /// Whether a battery must hold an invalid-input case expecting an error.
    #[serde(default = "default_true")]
    pub require_invalid_input_case: bool,
}

impl Default for AuthoringConfig {
    fn default() -> Self {
        Self {
            min_cases: DEFAULT_MIN_CASES,
            max_cases: DEFAULT_MAX_CASES,
            require_invalid_input_case: true,
        }
    }
}

/// One language entry in the seed discovery table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language identifier (e.g. `python`).
    pub id: LanguageId,
    /// Exact solution filename within a seed directory.
    pub solution_file: String,
    /// Test file extension including the leading dot (e.g. `.py`).
    pub test_extension: String,
}

/// Size limits for batteries and seed artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum battery file size in bytes.
    #[serde(default = "default_max_battery_bytes")]
    pub max_battery_bytes: usize,
    /// Maximum size of one seed artifact (prompt, solution, test) in bytes.
    #[serde(default = "default_max_artifact_bytes")]
    pub max_artifact_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_battery_bytes: MAX_BATTERY_FILE_BYTES,
            max_artifact_bytes: DEFAULT_MAX_ARTIFACT_BYTES,
        }
    }
}

impl Default for SeedcheckConfig {
    fn default() -> Self {
        Self {
            authoring: AuthoringConfig::default(),
            languages: default_languages(),
            limits: LimitsConfig::default(),
        }
    }
}

impl SeedcheckConfig {
    /// Loads configuration from disk.
    ///
    /// Resolution order: explicit `path`, then [`CONFIG_ENV_VAR`], then
    /// [`DEFAULT_CONFIG_NAME`]. When nothing was requested explicitly and the
    /// default file does not exist, the built-in defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path.is_some() || env::var(CONFIG_ENV_VAR).is_ok();
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        if !explicit && !resolved.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.authoring.validate()?;
        self.limits.validate()?;
        validate_languages(&self.languages)?;
        Ok(())
    }

    /// Returns the language entry for an identifier, if configured.
    #[must_use]
    pub fn language(&self, id: &LanguageId) -> Option<&LanguageConfig> {
        self.languages.iter().find(|language| language.id == *id)
    }
}

impl AuthoringConfig {
    /// Validates authoring-rule bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when bounds are inconsistent or out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_cases == 0 {
            return Err(ConfigError::Invalid("authoring.min_cases must be at least 1".to_string()));
        }
        if self.min_cases > self.max_cases {
            return Err(ConfigError::Invalid(
                "authoring.min_cases must not exceed authoring.max_cases".to_string(),
            ));
        }
        if self.max_cases > HARD_MAX_CASES {
            return Err(ConfigError::Invalid(format!(
                "authoring.max_cases must not exceed {HARD_MAX_CASES}"
            )));
        }
        Ok(())
    }
}

impl LimitsConfig {
    /// Validates size limits against the hard caps.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a limit is zero or exceeds its cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_battery_bytes == 0 || self.max_battery_bytes > MAX_BATTERY_FILE_BYTES {
            return Err(ConfigError::Invalid(format!(
                "limits.max_battery_bytes must be between 1 and {MAX_BATTERY_FILE_BYTES}"
            )));
        }
        if self.max_artifact_bytes == 0 || self.max_artifact_bytes > MAX_ARTIFACT_BYTES_CAP {
            return Err(ConfigError::Invalid(format!(
                "limits.max_artifact_bytes must be between 1 and {MAX_ARTIFACT_BYTES_CAP}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default minimum case count.
const fn default_min_cases() -> usize {
    DEFAULT_MIN_CASES
}

/// Default maximum case count.
const fn default_max_cases() -> usize {
    DEFAULT_MAX_CASES
}

/// Default boolean true for serde defaults.
const fn default_true() -> bool {
    true
}

/// Default maximum battery file size.
const fn default_max_battery_bytes() -> usize {
    MAX_BATTERY_FILE_BYTES
}

/// Default maximum seed artifact size.
const fn default_max_artifact_bytes() -> usize {
    DEFAULT_MAX_ARTIFACT_BYTES
}

/// Built-in language table mirroring the supported seed languages.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            id: "cpp".into(),
            solution_file: "solution.cpp".to_string(),
            test_extension: ".cpp".to_string(),
        },
        LanguageConfig {
            id: "python".into(),
            solution_file: "solution.py".to_string(),
            test_extension: ".py".to_string(),
        },
        LanguageConfig {
            id: "javascript".into(),
            solution_file: "solution.mjs".to_string(),
            test_extension: ".mjs".to_string(),
        },
        LanguageConfig {
            id: "java".into(),
            solution_file: "Solution.java".to_string(),
            test_extension: ".java".to_string(),
        },
    ]
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates the language table.
fn validate_languages(languages: &[LanguageConfig]) -> Result<(), ConfigError> {
    if languages.is_empty() {
        return Err(ConfigError::Invalid("language table must not be empty".to_string()));
    }
    if languages.len() > MAX_LANGUAGES {
        return Err(ConfigError::Invalid(format!(
            "language table must not exceed {MAX_LANGUAGES} entries"
        )));
    }
    for (index, language) in languages.iter().enumerate() {
        if languages.iter().skip(index + 1).any(|other| other.id == language.id) {
            return Err(ConfigError::Invalid(format!("duplicate language id: {}", language.id)));
        }
        if language.solution_file.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "language {} must name a solution file",
                language.id
            )));
        }
        if language.solution_file.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "language {} solution file must be a bare filename",
                language.id
            )));
        }
        if !language.test_extension.starts_with('.') || language.test_extension.len() < 2 {
            return Err(ConfigError::Invalid(format!(
                "language {} test extension must start with a dot",
                language.id
            )));
        }
    }
    Ok(())
}
