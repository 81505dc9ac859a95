use super::docker_run;
use crate::error::Result;
use crate::runner::{CommandRunner, DEFAULT_TIMEOUT};

/// List running containers (`docker ps`).
pub async fn list_containers(runner: &dyn CommandRunner) -> Result<String> {
    docker_run(runner, &["ps"], DEFAULT_TIMEOUT).await
}

/// Stop a container by ID or name.
pub async fn stop_container(runner: &dyn CommandRunner, container: &str) -> Result<String> {
    docker_run(runner, &["stop", container], DEFAULT_TIMEOUT).await
}
