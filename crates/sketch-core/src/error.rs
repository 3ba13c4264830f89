//! Error types for loading sketches.
//!
//! Decoding and playback cannot fail; only reading the backing file can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a sketch file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read sketch at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
