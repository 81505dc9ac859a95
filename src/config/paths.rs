use std::path::PathBuf;

/// Expand a leading `~` to the user's home directory.
///
/// Paths the user types at a prompt (Dockerfile targets, ISO locations,
/// config files) accept `~/...`; anything else passes through untouched.
pub fn expand_tilde(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}
