//! Command execution layer
//!
//! Everything cloudman does is a shell-out to `docker` or `qemu`. This
//! module owns that boundary: the `CommandRunner` trait runs an external
//! program from an argument vector (never a shell string) and normalizes
//! the outcome into a `RunOutcome`. The trait allows for mocking in tests.

pub mod mock;
mod system;
mod traits;

use std::time::Duration;

pub use mock::MockRunner;
pub use system::SystemRunner;
pub use traits::{CommandRunner, RunOutcome};

/// Timeout applied to ordinary invocations (listing, stopping, version checks).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Timeout for long-running operations: image build/pull and disk creation.
pub const LONG_TIMEOUT: Duration = Duration::from_secs(900);
