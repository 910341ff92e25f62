//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed through [`CommandDispatcher`].

pub mod check;
pub mod checks;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid input (unreadable files, malformed JSON,
    /// malformed contains checks). A requirement that simply does not match
    /// is a failure result, not an error.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    quiet: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let cmd = check::CheckCommand::new(args.clone(), self.quiet);
                cmd.execute()
            }
            Commands::Checks => checks::ChecksCommand.execute(),
        }
    }
}
