//! Event loop and input handling.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use ratatui::symbols::Marker;

use crate::app::{App, Input};
use crate::surface::Scene;
use crate::ui;

/// Run the main event loop.
pub fn run_event_loop(app: &mut App) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, app);
    ratatui::restore();
    result
}

fn run_loop(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    let poll_interval = app.config.playback.poll_interval();
    let mut input = Input::Redraw;

    while tick(terminal, app, input) {
        input = Input::Redraw;

        // Poll for events with timeout
        if event::poll(poll_interval)?
            && let Event::Key(key) = event::read()?
        {
            // Only handle key press events (not release on Windows)
            if key.kind == KeyEventKind::Press {
                input = input_for_key(key.modifiers, key.code);
            }
        }
    }

    Ok(())
}

/// Play one tick, redrawing the terminal whenever the sketch shows output.
fn tick(terminal: &mut DefaultTerminal, app: &mut App, input: Input) -> bool {
    let title = app.title();
    let marker = Marker::from(app.config.display.marker);
    let status = app.status();

    let running = app.process_tick(input, |scene| {
        draw(terminal, scene, &title, &status, marker);
    });

    // Status line catches up with the frame just played
    if running {
        draw(terminal, &app.scene, &title, &app.status(), marker);
    }
    running
}

fn draw(terminal: &mut DefaultTerminal, scene: &Scene, title: &str, status: &str, marker: Marker) {
    if let Err(e) = terminal.draw(|frame| ui::render(frame, scene, title, status, marker)) {
        log::warn!("redraw failed: {}", e);
    }
}

/// Map a key press to a viewer input.
pub fn input_for_key(modifiers: KeyModifiers, code: KeyCode) -> Input {
    match (modifiers, code) {
        (_, KeyCode::Esc)
        | (KeyModifiers::NONE, KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => Input::Quit,
        (KeyModifiers::NONE, KeyCode::Char('r')) => Input::Restart,
        _ => Input::Advance,
    }
}
