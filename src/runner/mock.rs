use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::traits::{CommandRunner, RunOutcome};
use crate::error::{Error, Result};

/// A mock command runner for testing
///
/// Records every invocation and returns pre-configured outcomes, so
/// operations can be exercised without docker or qemu installed.
#[derive(Debug, Default)]
pub struct MockRunner {
    /// Recorded calls for verification
    calls: Arc<Mutex<Vec<MockCall>>>,
    /// Pre-configured outcomes, returned in FIFO order
    outcomes: Arc<Mutex<Vec<RunOutcome>>>,
    /// When set, spawn_detached fails with CommandNotFound
    detached_fails: bool,
}

/// A recorded call to the mock runner
#[derive(Debug, Clone)]
pub struct MockCall {
    pub program: String,
    pub args: Vec<String>,
    /// True when the call was a detached launch rather than a blocking run
    pub detached: bool,
    /// Timeout the caller asked for (None for detached launches)
    pub timeout: Option<Duration>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome to return from the next run call
    pub fn with_outcome(self, outcome: RunOutcome) -> Self {
        self.outcomes.lock().unwrap().push(outcome);
        self
    }

    /// Queue a success outcome with the given stdout
    pub fn with_success(self, stdout: impl Into<String>) -> Self {
        self.with_outcome(RunOutcome::success(stdout))
    }

    /// Queue a failure outcome with the given stderr
    pub fn with_failure(self, stderr: impl Into<String>, exit_code: Option<i32>) -> Self {
        self.with_outcome(RunOutcome::failure(stderr, exit_code))
    }

    /// Make spawn_detached report the program as missing
    pub fn with_detached_failure(mut self) -> Self {
        self.detached_fails = true;
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded calls
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Check whether any call used the given program
    pub fn was_called_with_program(&self, program: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|call| call.program == program)
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, program: &str, args: &[&str], timeout: Duration) -> RunOutcome {
        self.calls.lock().unwrap().push(MockCall {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            detached: false,
            timeout: Some(timeout),
        });

        let next = {
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.is_empty() {
                None
            } else {
                Some(outcomes.remove(0))
            }
        };
        next.unwrap_or_else(|| RunOutcome::success(String::new()))
    }

    fn spawn_detached(&self, program: &str, args: &[&str]) -> Result<()> {
        self.calls.lock().unwrap().push(MockCall {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            detached: true,
            timeout: None,
        });

        if self.detached_fails {
            return Err(Error::CommandNotFound {
                name: program.to_string(),
            });
        }
        Ok(())
    }
}
