//! Docker operations
//!
//! Thin typed wrappers over the `docker` CLI. Each operation takes a
//! [`CommandRunner`] and returns the tool's stdout on success, so the
//! interactive layer only decides how to present the text.

mod containers;
mod dockerfile;
mod images;

use std::time::Duration;

pub use containers::{list_containers, stop_container};
pub use dockerfile::write_dockerfile;
pub use images::{
    build_image, filter_image_lines, list_images, pull_image, render_matches,
    search_local_images, search_registry,
};

use crate::error::{Error, Result};
use crate::runner::CommandRunner;

/// Run a docker subcommand and surface a failure as a crate error.
async fn docker_run(
    runner: &dyn CommandRunner,
    args: &[&str],
    timeout: Duration,
) -> Result<String> {
    let outcome = runner.run("docker", args, timeout).await;
    if outcome.success {
        Ok(outcome.stdout)
    } else {
        Err(Error::CommandFailed {
            program: "docker".to_string(),
            diagnostic: outcome.diagnostic().to_string(),
        })
    }
}
