//! Top and bottom bar rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::{App, Mode};

/// Render the top bar showing the documents and change counts.
pub fn render_top_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bar = Style::default().bg(app.theme.bg_elevated);

    let mut spans = vec![
        Span::styled(" ", bar),
        Span::styled(
            app.before_label(),
            bar.fg(app.theme.diff_delete_fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" → ", bar.fg(app.theme.text_muted)),
        Span::styled(
            app.after_label(),
            bar.fg(app.theme.diff_insert_fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", bar),
    ];

    let stats = app.stats;
    spans.push(Span::styled(format!("+{}", stats.added), bar.fg(app.theme.success)));
    spans.push(Span::styled(" ", bar));
    spans.push(Span::styled(format!("-{}", stats.removed), bar.fg(app.theme.error)));
    spans.push(Span::styled(" ", bar));
    spans.push(Span::styled(format!("~{}", stats.modified), bar.fg(app.theme.warning)));

    let right_text = format!("{}  ", app.options.algorithm);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(right_text.chars().count());
    spans.push(Span::styled(" ".repeat(padding_len), bar));
    spans.push(Span::styled(right_text, bar.fg(app.theme.text_muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the bottom bar with change position, messages and hints.
pub fn render_bottom_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bar = Style::default().bg(app.theme.bg_elevated);

    if app.ui.mode == Mode::Search {
        render_search_prompt(frame, app, area);
        return;
    }

    let position = match app.change_info() {
        Some((cur, total)) => format!(" change {}/{} ", cur, total),
        None if app.navigator.is_empty() => " no changes ".to_string(),
        None => format!(" {} changes ", app.navigator.len()),
    };
    let mut spans = vec![Span::styled(
        position,
        Style::default()
            .fg(app.theme.bg_dark)
            .bg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(ref err) = app.ui.error {
        spans.push(Span::styled(format!("  {}", err), bar.fg(app.theme.error)));
    } else if let Some(ref status) = app.ui.status {
        spans.push(Span::styled(format!("  {}", status), bar.fg(app.theme.success)));
    }

    let hints = if app.search.is_active() {
        "n/N match  Esc clear search  ? help "
    } else {
        "j/k change  / search  y copy  ? help  q quit "
    };
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::styled(" ".repeat(padding_len), bar));
    spans.push(Span::styled(hints, bar.fg(app.theme.text_muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);
}

/// Search prompt shown while a query is typed.
fn render_search_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let bar = Style::default().bg(app.theme.bg_elevated);
    let info = if app.ui.search_input.is_empty() {
        String::new()
    } else if let Some(hit) = app.search.current() {
        format!("  match {}/{}", hit.position(), hit.total)
    } else {
        "  not found".to_string()
    };
    let info_style = if app.search.is_active() && app.search.is_empty() {
        bar.fg(app.theme.error)
    } else {
        bar.fg(app.theme.text_muted)
    };

    let line = Line::from(vec![
        Span::styled(" Search: ", bar.fg(app.theme.accent)),
        Span::styled(app.ui.search_input.as_str(), bar.fg(app.theme.text_bright)),
        Span::styled("█", bar.fg(app.theme.accent)),
        Span::styled(info, info_style),
    ]);
    frame.render_widget(Paragraph::new(line).style(bar), area);
}
