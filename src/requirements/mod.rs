//! Declared environment requirements.
//!
//! A test (or a CI job, or a human at the CLI) declares what it needs from
//! the lab as a JSON value; [`EnvRequest`] wraps that declaration and answers
//! whether a given environment satisfies it. A runner that receives a
//! non-match typically skips the test with [`EnvRequest::skip_reason`].

use std::path::Path;

use serde_json::Value;

use crate::config::read_json_file;
use crate::error::{EnvmatchError, Result};
use crate::matcher::is_env_matching;

/// Skip message handed to runners on an environment mismatch.
pub const ENVIRONMENT_MISMATCH: &str = "Environment mismatch. Skipping";

/// A declared environment requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvRequest {
    value: Value,
}

impl EnvRequest {
    /// Wrap an already-parsed requirement value.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Parse a requirement from inline JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the JSON is invalid.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value = serde_json::from_str(content).map_err(|e| EnvmatchError::ConfigParseError {
            path: "<inline request>".into(),
            message: e.to_string(),
        })?;
        Ok(Self::new(value))
    }

    /// Load a requirement from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file doesn't exist.
    /// Returns `ConfigParseError` if the JSON is invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(read_json_file(path)?))
    }

    /// The raw requirement value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Check this requirement against an environment value.
    ///
    /// # Errors
    ///
    /// Propagates matcher errors for malformed contains checks.
    pub fn is_satisfied_by(&self, environment: &Value) -> Result<bool> {
        is_env_matching(&self.value, environment)
    }

    /// The skip reason a runner should report, or `None` when the
    /// environment satisfies this requirement.
    ///
    /// # Errors
    ///
    /// Propagates matcher errors for malformed contains checks.
    pub fn skip_reason(&self, environment: &Value) -> Result<Option<&'static str>> {
        if self.is_satisfied_by(environment)? {
            Ok(None)
        } else {
            Ok(Some(ENVIRONMENT_MISMATCH))
        }
    }
}
