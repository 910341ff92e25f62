//! Loading and parsing of environment configuration documents.
//!
//! The lab's current environment is described by a JSON document (typically
//! produced by the orchestration layer that deployed the devices). This
//! module loads that document and exposes it for requirement matching.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{EnvmatchError, Result};
use crate::matcher::is_env_matching;

/// Read and parse a JSON document, mapping failures to path-carrying errors.
///
/// Shared by environment config and requirement loading so the two cannot
/// diverge in how they report a missing or malformed file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the JSON is invalid.
pub(crate) fn read_json_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvmatchError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvmatchError::Io(e)
        }
    })?;
    serde_json::from_str(&content).map_err(|e| EnvmatchError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// A parsed environment configuration document.
///
/// Thin wrapper over the raw JSON value; the matcher consumes the value
/// as-is and the document structure is otherwise opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    value: Value,
}

impl EnvironmentConfig {
    /// Wrap an already-parsed environment value.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Load an environment config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file doesn't exist.
    /// Returns `ConfigParseError` if the JSON is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let value = read_json_file(path)?;
        tracing::debug!("loaded environment config from {}", path.display());
        Ok(Self::new(value))
    }

    /// Parse JSON content into an environment config.
    ///
    /// # Arguments
    ///
    /// * `content` - The JSON content to parse
    /// * `source_path` - Path for error reporting
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the JSON is invalid.
    pub fn from_json_str(content: &str, source_path: &Path) -> Result<Self> {
        let value = serde_json::from_str(content).map_err(|e| EnvmatchError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::new(value))
    }

    /// The raw environment value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Check whether this environment satisfies a requirement.
    ///
    /// # Errors
    ///
    /// Propagates matcher errors for malformed contains checks.
    pub fn satisfies(&self, requested: &Value) -> Result<bool> {
        is_env_matching(requested, &self.value)
    }
}
