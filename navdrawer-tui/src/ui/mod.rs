//! Top-level UI layout: app bar, screen host, status bar, drawer sheet,
//! overlays.

pub mod app_bar;
pub mod drawer;
pub mod overlays;
pub mod screens;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{AppState, Overlay};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: 1-line app bar + screen host + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let bar_area = chunks[0];
    let screen_area = chunks[1];
    let status_area = chunks[2];

    app_bar::render(f, bar_area, app);
    screens::render(f, screen_area, app);
    status_bar::render(f, status_area, app);

    // The drawer sheet slides over the screen host, between the bars.
    // Its width is a function of openness, so this call is the whole
    // animation.
    drawer::render(f, screen_area, app);

    // Overlays on top.
    match app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, screen_area),
        Overlay::EventLog => overlays::render_event_log(f, screen_area, app),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
