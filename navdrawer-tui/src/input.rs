//! Keyboard input dispatch: overlays first, then global keys, then the
//! drawer (when it has the focus), then the screen level.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use navdrawer_core::screen::Screen;

use crate::app::{AppState, Overlay};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::EventLog => {
            handle_event_log_key(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        _ => {}
    }

    // 3. An open (or opening) drawer owns the list keys, like the modal
    //    sheet it stands in for.
    if app.drawer_captures_input() {
        handle_drawer_key(app, key);
        return;
    }

    // 4. Screen-level keys.
    match key.code {
        KeyCode::Char('m') | KeyCode::Char(' ') => {
            app.scaffold.toggle_drawer();
            // Cursor starts on the active destination.
            app.drawer_cursor = app.scaffold.current_screen().index();
        }
        KeyCode::Esc | KeyCode::Backspace => {
            if !app.scaffold.go_back() {
                app.set_status("already at the root");
            }
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::EventLog;
            app.event_scroll = 0;
        }
        _ => {}
    }
}

fn handle_drawer_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('m') | KeyCode::Char(' ') => {
            app.scaffold.close_drawer();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.drawer_cursor + 1 < Screen::ALL.len() {
                app.drawer_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.drawer_cursor = app.drawer_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(target) = Screen::from_index(app.drawer_cursor) {
                app.scaffold.select_destination(target);
            }
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            if let Some(target) = Screen::from_index(index) {
                app.drawer_cursor = index;
                app.scaffold.select_destination(target);
            }
        }
        _ => {}
    }
}

fn handle_event_log_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.event_scroll + 1 < app.event_history.len() {
                app.event_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.event_scroll = app.event_scroll.saturating_sub(1);
        }
        _ => {}
    }
}
