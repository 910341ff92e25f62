//! The `checks` command: list the recognized contains checks.

use crate::cli::commands::{Command, CommandResult};
use crate::error::Result;
use crate::matcher::ContainsCheck;

/// Prints the recognized contains checks with a short description of each.
pub struct ChecksCommand;

fn description(check: ContainsCheck) -> &'static str {
    match check {
        ContainsCheck::ContainsExact => "operand is a literal substring of the value",
        ContainsCheck::NotContainsExact => "operand is not a literal substring of the value",
        ContainsCheck::ContainsRegex => "operand, as a regex, matches somewhere in the value",
        ContainsCheck::NotContainsRegex => "operand, as a regex, matches nowhere in the value",
    }
}

impl Command for ChecksCommand {
    fn execute(&self) -> Result<CommandResult> {
        for check in ContainsCheck::ALL {
            println!("{:<20} {}", check.as_str(), description(check));
        }
        Ok(CommandResult::success())
    }
}
