use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Normalized outcome of running an external program
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Whether the program ran and exited with code zero
    pub success: bool,
    /// Captured standard output, trimmed of surrounding whitespace
    pub stdout: String,
    /// Captured standard error, trimmed of surrounding whitespace
    pub stderr: String,
    /// Exit code if the program ran to completion
    pub exit_code: Option<i32>,
}

impl RunOutcome {
    /// Create a successful outcome
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: Some(0),
        }
    }

    /// Create a failed outcome
    pub fn failure(stderr: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    /// The text callers should show when the run failed.
    ///
    /// Stderr is authoritative; stdout is the fallback when the program
    /// wrote its complaint to the wrong stream.
    pub fn diagnostic(&self) -> &str {
        if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Trait for running external programs
///
/// The argument list is passed through as an argument vector, never joined
/// into a shell string, so paths and search terms containing spaces or
/// shell metacharacters reach the program unmodified.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, waiting up to `timeout` for it to exit.
    ///
    /// This never fails at the Rust level: a program that cannot be
    /// launched or that exceeds the timeout comes back as a `RunOutcome`
    /// with `success == false` and a synthesized stderr message.
    async fn run(&self, program: &str, args: &[&str], timeout: Duration) -> RunOutcome;

    /// Start `program` with `args` without waiting for it to exit.
    ///
    /// No handle, exit status, or output is retained; the child's lifetime
    /// is independent of the caller afterward.
    fn spawn_detached(&self, program: &str, args: &[&str]) -> Result<()>;
}
