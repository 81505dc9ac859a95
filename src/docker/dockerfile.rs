use std::path::Path;

use crate::error::Result;

/// Write user-supplied Dockerfile lines verbatim to `path`.
///
/// Parent directories are created as needed. Lines are joined with `\n`
/// and written exactly as entered.
pub async fn write_dockerfile(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, lines.join("\n")).await?;
    Ok(())
}
