//! Overlay rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::app::App;

/// Render the keybinding help overlay.
pub fn render_help_overlay(frame: &mut Frame, app: &App) {
    let entries = [
        ("j/n or ↓", "Next change"),
        ("k/N/p or ↑", "Previous change"),
        ("Home / End", "First / last change"),
        ("Ctrl+d / Ctrl+u", "Scroll half a page"),
        ("PgDn / PgUp", "Scroll a page"),
        ("h/l or ←/→", "Scroll horizontally"),
        ("g / G", "Jump to top / bottom"),
        ("y", "Copy current change"),
        ("c", "Copy the new document"),
        ("r", "Reload both documents"),
        ("/", "Search rows (Enter keeps, Esc clears)"),
        ("n / N", "Next / previous match while searching"),
        ("a", "Switch lookahead / Myers"),
        ("t", "Next theme"),
        ("S", "Save settings to config"),
        ("?", "Close this help overlay"),
        ("q, Esc or Ctrl+C", "Quit confdiff"),
    ];

    let area = frame.area();
    let max_width = area.width.saturating_sub(2).max(1);
    let width = 56.min(max_width);
    let needed_height = (entries.len() as u16 + 5).max(10);
    let max_height = area.height.saturating_sub(2).max(1);
    let height = needed_height.min(max_height);

    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, overlay_area);

    let bg = Style::default().bg(app.theme.bg_elevated);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent))
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .style(bg);

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    if inner.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Press ? again, Esc, or q to close.",
            bg.fg(app.theme.text_muted),
        )),
        Line::from(Span::styled("", bg)),
    ];

    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", key), bg.fg(app.theme.accent)),
            Span::styled(desc, bg.fg(app.theme.text_normal)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(bg), inner);
}
