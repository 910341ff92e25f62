//! Error types for envmatch operations.
//!
//! This module defines [`EnvmatchError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A requirement that simply does not line up with the environment is
//!   `Ok(false)`, never an error
//! - `EnvmatchError` is reserved for malformed input: unrecognized contains
//!   checks, invalid regex operands, unreadable or unparseable config files
//! - Use `anyhow::Error` (via `EnvmatchError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envmatch operations.
#[derive(Debug, Error)]
pub enum EnvmatchError {
    /// A contains-check list referenced one or more unrecognized check names.
    /// Carries every offending name, not just the first found.
    #[error("invalid contains checks: {}, please check your environment request", .checks.join(", "))]
    InvalidContainsChecks { checks: Vec<String> },

    /// A `contains_regex`/`not_contains_regex` operand failed to compile.
    #[error("invalid regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },

    /// Environment config file not found at expected location.
    #[error("environment config not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse an environment config or request document.
    #[error("failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envmatch operations.
pub type Result<T> = std::result::Result<T, EnvmatchError>;
