use std::path::PathBuf;

/// Error types for cloudman
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Command not found: {name}")]
    CommandNotFound { name: String },

    #[error("'{program}' failed: {diagnostic}")]
    CommandFailed { program: String, diagnostic: String },

    #[error("Dockerfile not found: {path}")]
    DockerfileNotFound { path: PathBuf },

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Config is not valid JSON: {message}")]
    InvalidConfigJson { message: String },

    #[error("Missing key in config: {key}")]
    MissingConfigKey { key: String },

    #[error("Config value for '{key}' is not a valid {expected}")]
    InvalidConfigValue { key: String, expected: &'static str },

    #[error("'{key}' must be positive")]
    NonPositiveConfigValue { key: String },

    #[error("ISO file not found: {path}")]
    IsoNotFound { path: PathBuf },

    #[error("QEMU not found. Install QEMU first.")]
    QemuNotAvailable,

    #[error("Cancelled")]
    UserCancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
