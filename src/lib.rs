//! Envmatch - Environment requirement matching for hardware test labs.
//!
//! A test declares what it needs from the lab as a nested JSON value; the
//! lab's current configuration is another. Envmatch decides whether the
//! requirement is satisfied, so a runner can skip tests whose environment
//! is not available.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Environment configuration loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`matcher`] - The recursive matching predicate and contains checks
//! - [`requirements`] - Declared environment requirements
//!
//! # Example
//!
//! ```
//! use envmatch::matcher::is_env_matching;
//! use serde_json::json;
//!
//! let environment = json!({
//!     "environment_def": {"board": {"eRouter_Provisioning_mode": "dual"}}
//! });
//! let request = json!({
//!     "environment_def": {"board": {"eRouter_Provisioning_mode": ["dual", "combined"]}}
//! });
//! assert!(is_env_matching(&request, &environment).unwrap());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod requirements;

pub use error::{EnvmatchError, Result};
pub use matcher::{is_env_matching, ContainsCheck};
