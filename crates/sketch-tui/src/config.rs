//! Viewer configuration (config.toml) parsing.
//!
//! The file is optional. It is looked up at `$SKETCH_CONFIG` if set, else at
//! `<config dir>/sketch/config.toml`:
//!
//! ```toml
//! [display]
//! width = 200
//! height = 200
//! marker = "braille"   # braille | block | dot | half-block
//!
//! [playback]
//! poll_interval_ms = 100
//! max_pause_ms = 10000
//! watch_file = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::symbols::Marker;
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SKETCH_CONFIG";

/// A parsed viewer configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub display: DisplaySection,
    pub playback: PlaybackSection,
}

/// The `[display]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Width of the drawing area in sketch units.
    pub width: u32,
    /// Height of the drawing area in sketch units.
    pub height: u32,
    /// Glyphs used to plot points in the terminal.
    pub marker: MarkerKind,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            marker: MarkerKind::default(),
        }
    }
}

/// The `[playback]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaybackSection {
    /// How long the event loop waits for input before redrawing.
    pub poll_interval_ms: u64,
    /// Upper bound on a single pause instruction.
    pub max_pause_ms: u64,
    /// Reload and restart when the sketch file changes on disk.
    pub watch_file: bool,
}

impl Default for PlaybackSection {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            max_pause_ms: 10_000,
            watch_file: true,
        }
    }
}

impl PlaybackSection {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn max_pause(&self) -> Duration {
        Duration::from_millis(self.max_pause_ms)
    }
}

/// Terminal plotting glyphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKind {
    #[default]
    Braille,
    Block,
    Dot,
    HalfBlock,
}

impl From<MarkerKind> for Marker {
    fn from(kind: MarkerKind) -> Self {
        match kind {
            MarkerKind::Braille => Marker::Braille,
            MarkerKind::Block => Marker::Block,
            MarkerKind::Dot => Marker::Dot,
            MarkerKind::HalfBlock => Marker::HalfBlock,
        }
    }
}

impl ViewerConfig {
    /// Load the configuration from its default location.
    ///
    /// A missing file gives the defaults. A broken file is reported with
    /// `log::warn!` and also gives the defaults.
    pub fn load() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load a configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_owned(),
            source: e,
        })?;

        Self::from_str(&content, path)
    }

    /// Parse a configuration from a string.
    pub fn from_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: ViewerConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })?;

        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |field, reason: &str| ConfigError::Invalid {
            path: path.to_owned(),
            field,
            reason: reason.to_string(),
        };

        if self.display.width == 0 {
            return Err(invalid("display.width", "must be at least 1"));
        }
        if self.display.height == 0 {
            return Err(invalid("display.height", "must be at least 1"));
        }
        if self.playback.poll_interval_ms == 0 {
            return Err(invalid("playback.poll_interval_ms", "must be at least 1"));
        }
        Ok(())
    }
}

/// Get the config file path: `$SKETCH_CONFIG`, else the platform config dir.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|p| p.join("sketch").join("config.toml"))
}
