//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Envmatch - Environment requirement matching for hardware test labs.
#[derive(Debug, Parser)]
#[command(name = "envmatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output (exit code only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a requirement against an environment config
    Check(CheckArgs),

    /// List the recognized contains checks
    Checks,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Path to the environment config (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub env_config: PathBuf,

    /// Path to the requirement (JSON)
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present = "request_json",
        conflicts_with = "request_json"
    )]
    pub request: Option<PathBuf>,

    /// Inline requirement JSON
    #[arg(long, value_name = "JSON")]
    pub request_json: Option<String>,
}
