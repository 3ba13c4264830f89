//! A loaded sketch file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::LoadError;
use crate::player;

/// The byte stream of a sketch, cached in memory.
///
/// The stream is immutable once loaded. [`Sketch::changed_on_disk`] tells the
/// host when the backing file was replaced so it can reload and start over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sketch {
    bytes: Vec<u8>,
    path: Option<PathBuf>,
    modified: Option<SystemTime>,
}

impl Sketch {
    /// Read a sketch from a file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = fs::read(path).map_err(|e| LoadError::Io {
            path: path.to_owned(),
            source: e,
        })?;
        let modified = fs::metadata(path).and_then(|m| m.modified()).ok();

        log::info!("loaded {} bytes from {}", bytes.len(), path.display());

        Ok(Self {
            bytes,
            path: Some(path.to_owned()),
            modified,
        })
    }

    /// Wrap an in-memory byte stream.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            path: None,
            modified: None,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The file this sketch was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of frames (frame markers + 1).
    pub fn frame_count(&self) -> usize {
        player::frame_count(&self.bytes)
    }

    /// Whether the backing file's size or modification time differs from
    /// what was loaded. In-memory sketches never change.
    ///
    /// A file that can no longer be inspected counts as unchanged; the
    /// cached stream keeps playing.
    pub fn changed_on_disk(&self) -> bool {
        let Some(path) = &self.path else {
            return false;
        };
        match fs::metadata(path) {
            Ok(meta) => {
                meta.len() != self.bytes.len() as u64 || meta.modified().ok() != self.modified
            }
            Err(e) => {
                log::debug!("cannot stat {}: {}", path.display(), e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_bytes() {
        let sketch = Sketch::from_bytes(vec![0x41, 0x08, 0x81]);
        assert_eq!(sketch.len(), 3);
        assert_eq!(sketch.frame_count(), 2);
        assert_eq!(sketch.path(), None);
        assert!(!sketch.changed_on_disk());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x43, 0x84]).unwrap();
        file.flush().unwrap();

        let sketch = Sketch::load(file.path()).unwrap();
        assert_eq!(sketch.bytes(), &[0x43, 0x84]);
        assert_eq!(sketch.path(), Some(file.path()));
        assert!(!sketch.changed_on_disk());
    }

    #[test]
    fn test_detects_rewrite() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x43]).unwrap();
        file.flush().unwrap();
        let sketch = Sketch::load(file.path()).unwrap();

        file.write_all(&[0x84]).unwrap();
        file.flush().unwrap();
        assert!(sketch.changed_on_disk());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.sk");
        let err = Sketch::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.sk"));
    }
}
