//! Error types for the viewer.

use std::path::PathBuf;

use sketch_core::LoadError;
use thiserror::Error;

/// Errors that can occur when reading the viewer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for '{field}' in {path}: {reason}")]
    Invalid {
        path: PathBuf,
        field: &'static str,
        reason: String,
    },
}

/// Errors that stop the viewer.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
