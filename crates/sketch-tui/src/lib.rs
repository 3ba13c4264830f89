//! Sketch viewer - terminal player for sketch files.
//!
//! Plays a sketch in the terminal using ratatui. A static sketch is drawn
//! once; an animation advances one frame per tick or key press.

mod app;
pub mod config;
pub mod error;
mod event;
pub mod surface;
pub mod ui;

pub use app::{App, Input};
pub use config::ViewerConfig;
pub use error::{ConfigError, ViewerError};

use std::path::Path;

use sketch_core::Sketch;

/// Load `path` and play it until the user quits.
pub fn run(path: &Path) -> Result<(), ViewerError> {
    let config = ViewerConfig::load();
    let sketch = Sketch::load(path)?;
    let mut app = App::new(sketch, config);
    event::run_event_loop(&mut app)?;
    Ok(())
}
