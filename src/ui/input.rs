//! Input handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use super::app::{App, Mode};

/// Handle a crossterm event.
/// Returns true if the event was handled.
pub fn handle_input(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => {
                app.scroll_diff(3, 0);
                true
            }
            MouseEventKind::ScrollUp => {
                app.scroll_diff(-3, 0);
                true
            }
            _ => false,
        },
        Event::Resize(_, _) => {
            app.mark_dirty();
            true
        }
        _ => false,
    }
}

/// Handle a key event.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return true;
    }

    match app.ui.mode {
        Mode::Help => return handle_help_key(app, key),
        Mode::Search => return handle_search_key(app, key),
        Mode::Normal => {}
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc if app.search.is_active() => {
            app.clear_search();
            true
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            true
        }
        KeyCode::Char('/') => {
            app.start_search();
            true
        }
        // With a search active, n/N step through matches instead of changes.
        KeyCode::Char('n') if app.search.is_active() => {
            app.next_match();
            true
        }
        KeyCode::Char('N') if app.search.is_active() => {
            app.prev_match();
            true
        }
        KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('n') | KeyCode::Down => {
            app.next_change();
            true
        }
        KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('N') | KeyCode::Char('p')
        | KeyCode::Up => {
            app.prev_change();
            true
        }
        KeyCode::Home => {
            app.first_change();
            true
        }
        KeyCode::End => {
            app.last_change();
            true
        }
        KeyCode::Char('d') if ctrl => {
            app.scroll_half_page(1);
            true
        }
        KeyCode::Char('u') if ctrl => {
            app.scroll_half_page(-1);
            true
        }
        KeyCode::PageDown => {
            app.scroll_diff(20, 0);
            true
        }
        KeyCode::PageUp => {
            app.scroll_diff(-20, 0);
            true
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.scroll_diff(0, -4);
            true
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.scroll_diff(0, 4);
            true
        }
        KeyCode::Char('g') => {
            app.scroll_to_top();
            true
        }
        KeyCode::Char('G') => {
            app.scroll_to_bottom();
            true
        }
        KeyCode::Char('y') => {
            app.copy_current_change();
            true
        }
        KeyCode::Char('c') => {
            app.copy_after_document();
            true
        }
        KeyCode::Char('r') => {
            app.reload();
            true
        }
        KeyCode::Char('a') => {
            app.toggle_algorithm();
            true
        }
        KeyCode::Char('t') => {
            app.cycle_theme();
            true
        }
        KeyCode::Char('S') => {
            app.save_settings();
            true
        }
        _ => false,
    }
}

/// Handle keys while typing a search query.
fn handle_search_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.cancel_search();
            true
        }
        KeyCode::Enter => {
            app.apply_search();
            true
        }
        KeyCode::Backspace => {
            app.ui.search_input.pop();
            app.update_search_live();
            true
        }
        KeyCode::Char(c) => {
            app.ui.search_input.push(c);
            app.update_search_live();
            true
        }
        _ => false,
    }
}

/// Handle keys while the help overlay is open.
fn handle_help_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => {
            app.toggle_help();
            true
        }
        _ => false,
    }
}
