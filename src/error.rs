use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid timeout_ms: {0}. Must be greater than zero.")]
    InvalidTimeout(u64),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
