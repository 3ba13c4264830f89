//! Application state for the viewer.

use sketch_core::{DrawingState, Sketch, is_finished, play_frame};

use crate::config::ViewerConfig;
use crate::surface::{Scene, TerminalCanvas};

/// An input signal delivered to the viewer once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Nothing happened; keep playing.
    Redraw,
    /// A key that has no other meaning.
    Advance,
    /// Start the sketch over from its first byte.
    Restart,
    /// Leave the viewer.
    Quit,
}

/// Application state.
pub struct App {
    /// The sketch being played.
    pub sketch: Sketch,
    /// Drawing state for `sketch`.
    pub state: DrawingState,
    /// Everything drawn so far.
    pub scene: Scene,
    pub config: ViewerConfig,
    /// Whether the app is still running.
    pub running: bool,
    /// Number of frames played since the last restart.
    pub frame: usize,
    /// Last error message (if any).
    pub last_error: Option<String>,
}

impl App {
    pub fn new(sketch: Sketch, config: ViewerConfig) -> Self {
        let scene = Scene::new(config.display.width, config.display.height);
        Self {
            sketch,
            state: DrawingState::new(),
            scene,
            config,
            running: true,
            frame: 0,
            last_error: None,
        }
    }

    /// Handle one input and play the next frame.
    ///
    /// `present` is called whenever the sketch shows its output. Returns
    /// whether the viewer keeps running.
    pub fn process_tick<F>(&mut self, input: Input, present: F) -> bool
    where
        F: FnMut(&Scene),
    {
        match input {
            Input::Quit => {
                self.running = false;
                return false;
            }
            Input::Restart => self.restart(),
            Input::Redraw | Input::Advance => {
                if self.config.playback.watch_file && self.sketch.changed_on_disk() {
                    self.reload();
                }
            }
        }

        let fresh = !self.is_finished();
        let mut canvas =
            TerminalCanvas::new(&mut self.scene, present, self.config.playback.max_pause());
        play_frame(self.sketch.bytes(), &mut self.state, &mut canvas);
        if fresh {
            self.frame += 1;
        }

        self.running
    }

    /// Rewind to the first frame and wipe the scene.
    pub fn restart(&mut self) {
        self.state.rewind();
        self.scene.clear();
        self.frame = 0;
        self.last_error = None;
    }

    /// Whether every frame has been played.
    pub fn is_finished(&self) -> bool {
        is_finished(self.sketch.bytes(), &self.state)
    }

    /// Display name of the sketch.
    pub fn title(&self) -> String {
        match self.sketch.path().and_then(|p| p.file_name()) {
            Some(name) => name.to_string_lossy().into_owned(),
            None => "sketch".to_string(),
        }
    }

    /// One-line playback status.
    pub fn status(&self) -> String {
        if let Some(ref err) = self.last_error {
            return err.clone();
        }
        let total = self.sketch.frame_count();
        if self.is_finished() {
            format!("frame {}/{} (end)", self.frame.min(total), total)
        } else {
            format!("frame {}/{}", self.frame, total)
        }
    }

    fn reload(&mut self) {
        let Some(path) = self.sketch.path().map(|p| p.to_owned()) else {
            return;
        };
        match Sketch::load(&path) {
            Ok(sketch) => {
                log::info!("{} changed on disk, restarting", path.display());
                self.sketch = sketch;
                self.restart();
            }
            Err(e) => {
                log::warn!("reload failed: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }
}
