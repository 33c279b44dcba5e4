use crate::error::{ReleaseError, Result};
use crate::tools::{ReleaseContext, ReleaseStep};
use std::process::Command;

/// Runs the external commands behind build and upload steps
pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute `command` for `step` with the release context in its environment
    ///
    /// The first element is the program, the rest are its arguments. The
    /// command inherits stdin/stdout/stderr so the operator sees tool output
    /// and can answer credential prompts.
    ///
    /// # Returns
    /// * `Ok(())` if the command exits with code 0
    /// * `Err` if the command is empty, cannot be started, or exits non-zero
    pub fn execute(step: ReleaseStep, command: &[String], context: &ReleaseContext) -> Result<()> {
        let (program, args) = command.split_first().ok_or_else(|| {
            ReleaseError::config(format!("No command configured for {} step", step.name()))
        })?;

        tracing::info!(step = step.name(), program = %program, ?args, "running release step");

        let status = Command::new(program)
            .args(args)
            .envs(context.to_env_vars())
            .status()
            .map_err(|e| {
                ReleaseError::tool(format!(
                    "Failed to start {} command '{}': {}",
                    step.name(),
                    program,
                    e
                ))
            })?;

        if !status.success() {
            return Err(ReleaseError::tool(format!(
                "{} command '{}' failed with exit code {}",
                step.name(),
                command.join(" "),
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ReleaseContext {
        ReleaseContext {
            version: "1.0.1".to_string(),
            previous_version: "1.0.0".to_string(),
            tag: "v1.0.1".to_string(),
        }
    }

    #[test]
    fn test_empty_command_fails() {
        let result = CommandExecutor::execute(ReleaseStep::Build, &[], &context());
        let err = result.unwrap_err();
        assert!(matches!(err, ReleaseError::Config(_)));
        assert!(err.to_string().contains("build"));
    }

    #[test]
    fn test_missing_program_fails() {
        let command = vec!["/nonexistent/path/to/twine".to_string()];
        let err = CommandExecutor::execute(ReleaseStep::Upload, &command, &context()).unwrap_err();
        assert!(err.to_string().contains("Failed to start upload command"));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command() {
        let command = vec!["true".to_string()];
        assert!(CommandExecutor::execute(ReleaseStep::Build, &command, &context()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_fails() {
        let command = vec!["sh".to_string(), "-c".to_string(), "exit 3".to_string()];
        let err = CommandExecutor::execute(ReleaseStep::Build, &command, &context()).unwrap_err();
        assert!(err.to_string().contains("exit code 3"));
    }

    #[cfg(unix)]
    #[test]
    fn test_context_is_exported_to_command() {
        let command = vec![
            "sh".to_string(),
            "-c".to_string(),
            "test \"$PYRELEASE_TAG\" = v1.0.1".to_string(),
        ];
        assert!(CommandExecutor::execute(ReleaseStep::Upload, &command, &context()).is_ok());
    }
}
