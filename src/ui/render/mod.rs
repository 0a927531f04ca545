//! UI rendering with ratatui.
//!
//! Layout: a one-line top bar (documents and stats), the diff pane, and a
//! one-line bottom bar (change position, hints, messages).

mod bars;
mod diff;
mod helpers;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use super::app::{App, Mode};

pub use helpers::{format_line_number, sanitize_char, GUTTER_WIDTH};

/// Main render function.
pub fn render(frame: &mut Frame, app: &mut App) {
    let _timer = crate::metrics::Timer::start("render_frame");

    let bg_block = Block::default().style(Style::default().bg(app.theme.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top bar
            Constraint::Min(0),    // Diff
            Constraint::Length(1), // Bottom bar
        ])
        .split(frame.area());

    bars::render_top_bar(frame, app, chunks[0]);
    diff::render_diff(frame, app, chunks[1]);
    bars::render_bottom_bar(frame, app, chunks[2]);

    if app.ui.mode == Mode::Help {
        overlays::render_help_overlay(frame, app);
    }
}
