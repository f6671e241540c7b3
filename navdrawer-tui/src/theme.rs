//! Indigo/slate theme tokens for the navdrawer TUI
//!
//! Provides a consistent color palette inspired by:
//! - Material dark surfaces (charcoal base, elevated sheet)
//! - Indigo accents for the bar, active destination, and highlights
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Surface**: Slightly lifted charcoal (the drawer sheet)
//! - **Accent**: Soft indigo (app bar, active item, focus)
//! - **Highlight**: Raised slate (cursor row background)
//! - **Muted**: Steel blue-gray (hints, secondary text)

use ratatui::style::{Color, Modifier, Style};

/// Near-black background (primary surface).
pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
/// Lifted charcoal (drawer sheet).
pub const SURFACE: Color = Color::Rgb(30, 30, 36);
/// Soft indigo accent.
pub const ACCENT: Color = Color::Rgb(140, 152, 222);
/// Raised slate (cursor row).
pub const HIGHLIGHT: Color = Color::Rgb(46, 46, 58);
/// Steel blue-gray (hints, secondary).
pub const MUTED: Color = Color::Rgb(110, 118, 148);
/// White (primary text).
pub const TEXT_PRIMARY: Color = Color::White;
/// Light gray (secondary text).
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// The whole app bar row.
pub fn app_bar() -> Style {
    Style::default().bg(ACCENT).fg(BACKGROUND)
}

pub fn app_bar_title() -> Style {
    app_bar().add_modifier(Modifier::BOLD)
}

/// Placeholder body text of the active screen.
pub fn screen_text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

/// The drawer sheet's own background.
pub fn sheet() -> Style {
    Style::default().bg(SURFACE)
}

/// The sheet's trailing edge.
pub fn sheet_edge() -> Style {
    Style::default().fg(HIGHLIGHT).bg(SURFACE)
}

pub fn sheet_header() -> Style {
    Style::default().fg(ACCENT).bg(SURFACE).add_modifier(Modifier::BOLD)
}

/// A destination row in the drawer. The active destination keeps its
/// accent even when the cursor sits elsewhere.
pub fn drawer_item(is_active: bool, under_cursor: bool) -> Style {
    let mut style = if is_active {
        Style::default().fg(ACCENT).bg(SURFACE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_SECONDARY).bg(SURFACE)
    };
    if under_cursor {
        style = style.bg(HIGHLIGHT);
    }
    style
}

pub fn overlay_border() -> Style {
    Style::default().fg(ACCENT)
}
