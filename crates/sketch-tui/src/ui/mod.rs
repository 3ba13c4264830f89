//! UI rendering for the viewer.

mod sketch_view;

use ratatui::prelude::*;
use ratatui::symbols::Marker;

use crate::surface::Scene;

pub use sketch_view::render_sketch_view;

/// Render the entire UI.
pub fn render(frame: &mut Frame, scene: &Scene, title: &str, status: &str, marker: Marker) {
    let area = frame.area();
    render_sketch_view(frame, scene, title, status, marker, area);
}
