use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use super::TmuxError;

/// Runs an external program and hands back its stdout
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn output(&self, program: &str, args: &[String]) -> Result<String, TmuxError>;
}

/// Runner backed by real subprocesses
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn output(&self, program: &str, args: &[String]) -> Result<String, TmuxError> {
        debug!(program, ?args, "running");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            return Err(TmuxError::CommandFailed {
                program: program.to_string(),
                subcommand: args.first().cloned().unwrap_or_default(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
