//! Diff pane rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cli::marker;
use crate::core::{DiffEntry, EntryKind};
use crate::theme::Theme;
use crate::ui::app::App;

use super::helpers::{format_line_number, visible_text, GUTTER_WIDTH};

/// Render the diff view.
pub fn render_diff(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = if app.is_watching() {
        " Diff (watching) "
    } else {
        " Diff "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_dim))
        .title(Span::styled(title, Style::default().fg(app.theme.text_muted)))
        .style(Style::default().bg(app.theme.bg_dark));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.set_viewport_height(inner.height as usize);

    if app.diff.is_empty() {
        let msg = Paragraph::new("Both documents are empty")
            .style(Style::default().fg(app.theme.text_muted));
        frame.render_widget(msg, inner);
        return;
    }

    let text_width = (inner.width as usize).saturating_sub(GUTTER_WIDTH);
    let start = app.viewer.scroll_y;
    let lines: Vec<Line> = app
        .diff
        .entries()
        .iter()
        .enumerate()
        .skip(start)
        .take(inner.height as usize)
        .map(|(row, entry)| {
            let marks = RowMarks {
                current_change: app.navigator.is_current_row(row),
                matched: app.search.contains_row(row),
                current_match: app.search.is_current_row(row),
            };
            render_row(entry, marks, app.viewer.scroll_x, text_width, &app.theme)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[derive(Debug, Clone, Copy)]
struct RowMarks {
    current_change: bool,
    matched: bool,
    current_match: bool,
}

fn render_row<'a>(
    entry: &'a DiffEntry,
    marks: RowMarks,
    scroll_x: usize,
    text_width: usize,
    theme: &Theme,
) -> Line<'a> {
    let (fg, bg) = match entry.kind {
        EntryKind::Added => (theme.diff_insert_fg, theme.diff_insert_bg),
        EntryKind::Removed => (theme.diff_delete_fg, theme.diff_delete_bg),
        EntryKind::Unchanged => (theme.text_dim, theme.bg_dark),
    };
    let bg = if marks.current_change || marks.current_match {
        theme.bg_selected
    } else {
        bg
    };
    let mut text_style = Style::default().fg(fg).bg(bg);
    if marks.current_change {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    if marks.matched {
        text_style = text_style.add_modifier(Modifier::UNDERLINED);
    }
    let gutter_style = Style::default().fg(theme.text_muted).bg(bg);

    let cursor = if marks.current_change {
        Span::styled("▌", Style::default().fg(theme.accent).bg(bg))
    } else if marks.current_match {
        Span::styled("›", Style::default().fg(theme.warning).bg(bg))
    } else {
        Span::styled(" ", gutter_style)
    };

    let mut text = visible_text(&entry.text, scroll_x, text_width);
    // Pad so the row background spans the whole pane.
    let pad = text_width.saturating_sub(text.chars().count());
    text.extend(std::iter::repeat(' ').take(pad));

    Line::from(vec![
        cursor,
        Span::styled(format_line_number(entry.old_line), gutter_style),
        Span::styled(" ", gutter_style),
        Span::styled(format_line_number(entry.new_line), gutter_style),
        Span::styled(" ", gutter_style),
        Span::styled(marker(entry.kind), text_style),
        Span::styled(text, text_style),
    ])
}
