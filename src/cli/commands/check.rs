//! The `check` command: evaluate a requirement against an environment.

use crate::cli::args::CheckArgs;
use crate::cli::commands::{Command, CommandResult};
use crate::config::EnvironmentConfig;
use crate::error::Result;
use crate::requirements::EnvRequest;

/// Evaluates a requirement against an environment config file.
///
/// Exit code 0 when the environment satisfies the requirement, 1 on a
/// mismatch; invalid input surfaces as an error before any verdict.
pub struct CheckCommand {
    args: CheckArgs,
    quiet: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs, quiet: bool) -> Self {
        Self { args, quiet }
    }

    fn load_request(&self) -> Result<EnvRequest> {
        if let Some(inline) = &self.args.request_json {
            return EnvRequest::from_json_str(inline);
        }
        // clap enforces that one of the two sources is present
        let Some(path) = self.args.request.as_deref() else {
            return Err(anyhow::anyhow!("no request given; use --request or --request-json").into());
        };
        EnvRequest::from_file(path)
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let environment = EnvironmentConfig::load(&self.args.env_config)?;
        let request = self.load_request()?;

        tracing::debug!(
            "checking request against {}",
            self.args.env_config.display()
        );

        match request.skip_reason(environment.as_value())? {
            None => {
                if !self.quiet {
                    println!("environment satisfies request");
                }
                Ok(CommandResult::success())
            }
            Some(reason) => {
                if !self.quiet {
                    println!("{reason}");
                }
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_env(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("env.json");
        fs::write(
            &path,
            r#"{"environment_def": {"board": {"eRouter_Provisioning_mode": "dual"}}}"#,
        )
        .unwrap();
        path
    }

    fn check(env_config: PathBuf, request_json: &str) -> Result<CommandResult> {
        let args = CheckArgs {
            env_config,
            request: None,
            request_json: Some(request_json.to_string()),
        };
        CheckCommand::new(args, true).execute()
    }

    #[test]
    fn matching_request_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let result = check(
            write_env(&dir),
            r#"{"environment_def": {"board": {"eRouter_Provisioning_mode": ["dual"]}}}"#,
        )
        .unwrap();
        assert!(result.success);
    }

    #[test]
    fn mismatching_request_fails_with_exit_code_one() {
        let dir = tempfile::tempdir().unwrap();
        let result = check(
            write_env(&dir),
            r#"{"environment_def": {"board": {"eRouter_Provisioning_mode": "bridge"}}}"#,
        )
        .unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn request_file_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let env_config = write_env(&dir);
        let request_path = dir.path().join("request.json");
        fs::write(&request_path, "null").unwrap();

        let args = CheckArgs {
            env_config,
            request: Some(request_path),
            request_json: None,
        };
        let result = CheckCommand::new(args, true).execute().unwrap();
        assert!(result.success);
    }

    #[test]
    fn missing_env_config_is_an_error() {
        let result = check(PathBuf::from("/nonexistent/env.json"), "null");
        assert!(result.is_err());
    }

    #[test]
    fn malformed_contains_check_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = check(
            write_env(&dir),
            r#"{"environment_def": {"board": {"eRouter_Provisioning_mode": [{"contains_abc": "x"}]}}}"#,
        );
        assert!(result.is_err());
    }
}
