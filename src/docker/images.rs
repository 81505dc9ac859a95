use std::path::Path;

use super::docker_run;
use crate::error::{Error, Result};
use crate::runner::{CommandRunner, DEFAULT_TIMEOUT, LONG_TIMEOUT};

/// Build an image from a Dockerfile.
///
/// The build context is the Dockerfile's parent directory. The Dockerfile
/// must already exist; builds use the long timeout.
pub async fn build_image(
    runner: &dyn CommandRunner,
    dockerfile: &Path,
    tag: &str,
) -> Result<String> {
    if !dockerfile.exists() {
        return Err(Error::DockerfileNotFound {
            path: dockerfile.to_path_buf(),
        });
    }

    let context = match dockerfile.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = dockerfile.to_string_lossy();
    let context = context.to_string_lossy();

    docker_run(
        runner,
        &["build", "-t", tag, "-f", &file, &context],
        LONG_TIMEOUT,
    )
    .await
}

/// List local images (`docker images`).
pub async fn list_images(runner: &dyn CommandRunner) -> Result<String> {
    docker_run(runner, &["images"], DEFAULT_TIMEOUT).await
}

/// Keep only listing lines containing the query, case-insensitively,
/// preserving the original order.
pub fn filter_image_lines(listing: &str, query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    listing
        .lines()
        .filter(|line| line.to_lowercase().contains(&query))
        .map(ToString::to_string)
        .collect()
}

/// Render filtered lines for display, with a literal marker when empty.
pub fn render_matches(matches: &[String]) -> String {
    if matches.is_empty() {
        "(no matches)".to_string()
    } else {
        matches.join("\n")
    }
}

/// Search the local image listing for a substring.
pub async fn search_local_images(runner: &dyn CommandRunner, query: &str) -> Result<String> {
    let listing = list_images(runner).await?;
    Ok(render_matches(&filter_image_lines(&listing, query)))
}

/// Search the registry (`docker search`).
pub async fn search_registry(runner: &dyn CommandRunner, term: &str) -> Result<String> {
    docker_run(runner, &["search", term], DEFAULT_TIMEOUT).await
}

/// Pull an image from the registry, with the long timeout.
pub async fn pull_image(runner: &dyn CommandRunner, image: &str) -> Result<String> {
    docker_run(runner, &["pull", image], LONG_TIMEOUT).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::MockRunner;

    const LISTING: &str = "REPOSITORY   TAG      IMAGE ID       SIZE\n\
                           nginx        latest   a1b2c3d4e5f6   187MB\n\
                           redis        7.2      f6e5d4c3b2a1   117MB\n\
                           MyApp        1.0      0123456789ab   54MB";

    #[test]
    fn test_filter_is_case_insensitive() {
        let matches = filter_image_lines(LISTING, "MYAPP");
        assert_eq!(matches.len(), 1);
        assert!(matches[0].contains("MyApp"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let matches = filter_image_lines(LISTING, "1");
        let joined = matches.join("\n");
        let nginx = joined.find("nginx").unwrap();
        let redis = joined.find("redis").unwrap();
        assert!(nginx < redis);
    }

    #[test]
    fn test_filter_no_matches() {
        let matches = filter_image_lines(LISTING, "postgres");
        assert!(matches.is_empty());
        assert_eq!(render_matches(&matches), "(no matches)");
    }

    #[test]
    fn test_render_matches_joins_lines() {
        let matches = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render_matches(&matches), "a\nb");
    }

    #[tokio::test]
    async fn test_search_local_images_filters_listing() {
        let mock = MockRunner::new().with_success(LISTING);
        let rendered = search_local_images(&mock, "redis").await.unwrap();
        assert!(rendered.contains("redis"));
        assert!(!rendered.contains("nginx"));
        assert_eq!(mock.calls()[0].args, vec!["images"]);
    }

    #[tokio::test]
    async fn test_search_local_images_surfaces_listing_failure() {
        let mock = MockRunner::new().with_failure("daemon not running", Some(1));
        let err = search_local_images(&mock, "redis").await.unwrap_err();
        assert!(err.to_string().contains("daemon not running"));
    }

    #[tokio::test]
    async fn test_build_image_requires_existing_dockerfile() {
        let mock = MockRunner::new();
        let err = build_image(&mock, Path::new("/nonexistent/Dockerfile"), "app:1.0")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::DockerfileNotFound { .. }));
        // Validation failures never reach the external tool.
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_build_image_uses_parent_as_context() {
        let dir = tempfile::tempdir().unwrap();
        let dockerfile = dir.path().join("Dockerfile");
        tokio::fs::write(&dockerfile, "FROM scratch").await.unwrap();

        let mock = MockRunner::new().with_success("built");
        build_image(&mock, &dockerfile, "app:1.0").await.unwrap();

        let call = &mock.calls()[0];
        assert_eq!(call.program, "docker");
        assert_eq!(call.args[0], "build");
        assert_eq!(call.args[1], "-t");
        assert_eq!(call.args[2], "app:1.0");
        assert_eq!(call.args[5], dir.path().to_string_lossy());
        assert_eq!(call.timeout, Some(crate::runner::LONG_TIMEOUT));
    }

    #[tokio::test]
    async fn test_pull_image_uses_long_timeout() {
        let mock = MockRunner::new().with_success("pulled");
        pull_image(&mock, "nginx:latest").await.unwrap();

        let call = &mock.calls()[0];
        assert_eq!(call.args, vec!["pull", "nginx:latest"]);
        assert_eq!(call.timeout, Some(crate::runner::LONG_TIMEOUT));
    }

    #[tokio::test]
    async fn test_failure_diagnostic_prefers_stderr() {
        let mock = MockRunner::new().with_outcome(crate::runner::RunOutcome {
            success: false,
            stdout: "partial output".to_string(),
            stderr: "manifest unknown".to_string(),
            exit_code: Some(1),
        });
        let err = pull_image(&mock, "ghost:1").await.unwrap_err();
        assert!(err.to_string().contains("manifest unknown"));
        assert!(!err.to_string().contains("partial output"));
    }
}
