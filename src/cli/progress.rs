use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a long-timeout command (build, pull, disk
/// creation) blocks the console.
pub fn long_running_spinner(message: &str) -> ProgressBar {
    let spinner_style = ProgressStyle::with_template("{spinner:.bold} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_finishes_cleanly() {
        let pb = long_running_spinner("Working...");
        pb.finish_and_clear();
        assert!(pb.is_finished());
    }
}
