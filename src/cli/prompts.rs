use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use inquire::{CustomType, Text};

use crate::config::expand_tilde;
use crate::error::{Error, Result};

/// Marker line that ends Dockerfile input.
pub const DOCKERFILE_END_MARKER: &str = "EOF";

/// Prompt for a free-text value. Esc cancels.
pub fn prompt_text(label: &str) -> Result<String> {
    let answer = Text::new(label)
        .prompt()
        .map_err(|_| Error::UserCancelled)?;
    Ok(answer.trim().to_string())
}

/// Prompt for a path, with `~` expansion.
pub fn prompt_path(label: &str) -> Result<PathBuf> {
    let answer = prompt_text(label)?;
    Ok(expand_tilde(&answer))
}

/// Prompt for a positive integer; re-prompts on unparsable input.
pub fn prompt_number(label: &str) -> Result<u32> {
    CustomType::<u32>::new(label)
        .with_error_message("Please enter a valid number")
        .prompt()
        .map_err(|_| Error::UserCancelled)
}

/// Read Dockerfile lines from stdin until the end marker.
///
/// Lines are kept verbatim; only a line whose trimmed content equals the
/// marker terminates input (and is not included).
pub fn read_dockerfile_lines() -> Result<Vec<String>> {
    println!("Type Dockerfile lines. Type {DOCKERFILE_END_MARKER} to finish.");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if is_end_marker(&line) {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

fn is_end_marker(line: &str) -> bool {
    line.trim() == DOCKERFILE_END_MARKER
}

/// Split already-collected input into Dockerfile lines, stopping at the
/// end marker. Same termination rule as `read_dockerfile_lines`.
pub fn collect_dockerfile_lines<I>(input: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    input
        .into_iter()
        .take_while(|line| !is_end_marker(line))
        .collect()
}
