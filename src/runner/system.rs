use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use super::traits::{CommandRunner, RunOutcome};
use crate::error::{Error, Result};

/// Runner backed by real child processes
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str], timeout: Duration) -> RunOutcome {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return RunOutcome::failure(format!("Command not found: {program}"), None);
            }
            Err(e) => {
                return RunOutcome::failure(format!("Failed to start '{program}': {e}"), None);
            }
        };

        // On timeout the child future is dropped, which kills the process
        // because of kill_on_drop above.
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return RunOutcome::failure(format!("Failed to run '{program}': {e}"), None);
            }
            Err(_) => {
                return RunOutcome::failure("Command timed out", None);
            }
        };

        RunOutcome {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code(),
        }
    }

    fn spawn_detached(&self, program: &str, args: &[&str]) -> Result<()> {
        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());

        match cmd.spawn() {
            // Dropping the child leaves it running; nothing reaps it.
            Ok(_child) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::CommandNotFound {
                name: program.to_string(),
            }),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
