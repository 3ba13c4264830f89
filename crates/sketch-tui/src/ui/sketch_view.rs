//! Sketch view: the scene on a ratatui canvas plus a status line.

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};

use sketch_core::Colour;

use crate::surface::{Scene, Shape};

/// Dot rows per terminal row for the densest marker (braille).
const DOTS_PER_ROW: f64 = 4.0;

/// Render the sketch view in the given area.
pub fn render_sketch_view(
    frame: &mut Frame,
    scene: &Scene,
    title: &str,
    status: &str,
    marker: Marker,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Reserve space for help text at bottom (1 line)
    let canvas_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    let help_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );

    let width = f64::from(scene.width());
    let height = f64::from(scene.height());
    let step = if canvas_area.height == 0 {
        height
    } else {
        height / (f64::from(canvas_area.height) * DOTS_PER_ROW)
    };

    let canvas = Canvas::default()
        .marker(marker)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| paint_scene(ctx, scene, step));

    frame.render_widget(canvas, canvas_area);

    let help = Paragraph::new(Line::from(vec![
        Span::raw(status.to_string()),
        Span::raw("  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(":restart  "),
        Span::styled("q/ESC", Style::default().fg(Color::Yellow)),
        Span::raw(":quit  "),
        Span::styled("any key", Style::default().fg(Color::Yellow)),
        Span::raw(":next"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, help_area);
}

fn paint_scene(ctx: &mut Context, scene: &Scene, step: f64) {
    let width = f64::from(scene.width());
    let height = f64::from(scene.height());

    for shape in scene.shapes() {
        match *shape {
            Shape::Line {
                x0,
                y0,
                x1,
                y1,
                colour,
            } => {
                // Sketch y grows downwards, canvas y upwards
                ctx.draw(&CanvasLine {
                    x1: f64::from(x0),
                    y1: height - f64::from(y0),
                    x2: f64::from(x1),
                    y2: height - f64::from(y1),
                    color: terminal_colour(colour),
                });
            }
            Shape::Block {
                left,
                top,
                right,
                bottom,
                colour,
            } => {
                let color = terminal_colour(colour);
                for (y, x_from, x_to) in scanlines(left, top, right, bottom, width, height, step) {
                    ctx.draw(&CanvasLine {
                        x1: x_from,
                        y1: y,
                        x2: x_to,
                        y2: y,
                        color,
                    });
                }
            }
        }
    }
}

fn terminal_colour(colour: Colour) -> Color {
    Color::Rgb(colour.r, colour.g, colour.b)
}

/// Horizontal lines `(canvas_y, x_from, x_to)` filling a block, clipped to
/// the viewport. Consecutive lines are at most `step` apart.
fn scanlines(
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
    width: f64,
    height: f64,
    step: f64,
) -> Vec<(f64, f64, f64)> {
    let x_from = (left as f64).max(0.0);
    let x_to = (right as f64).min(width);
    let y_from = (top as f64).max(0.0);
    let y_to = (bottom as f64).min(height);
    if x_from > x_to || y_from > y_to || step <= 0.0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut y = y_from;
    while y < y_to {
        lines.push((height - y, x_from, x_to));
        y += step;
    }
    lines.push((height - y_to, x_from, x_to));
    lines
}
