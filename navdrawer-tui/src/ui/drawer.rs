//! The drawer sheet: slides in from the left, over the screen host.
//!
//! All animation happens here by reading openness each frame. At 0 the
//! sheet does not exist; anywhere above, it is a partial-width strip
//! whose content is clipped by the sheet edge until fully extended. The
//! app bar and status bar are never covered.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use navdrawer_core::screen::Screen;

use crate::app::AppState;
use crate::theme;

/// Sheet width in columns at full extension.
pub const SHEET_WIDTH: u16 = 30;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let openness = app.scaffold.drawer_openness();
    let width = (f32::from(SHEET_WIDTH) * openness).round() as u16;
    if width == 0 {
        return;
    }

    let sheet = Rect {
        x: area.x,
        y: area.y,
        width: width.min(area.width),
        height: area.height,
    };
    f.render_widget(Clear, sheet);

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::sheet_edge())
        .style(theme::sheet());
    let inner = block.inner(sheet);
    f.render_widget(block, sheet);

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled("  Example Drawer", theme::sheet_header())),
        Line::from(Span::styled("  Navigation", theme::sheet_header())),
        Line::from(""),
    ];

    let active = app.scaffold.current_screen();
    for (i, screen) in Screen::ALL.iter().enumerate() {
        let marker = if i == app.drawer_cursor { "▸ " } else { "  " };
        let style = theme::drawer_item(*screen == active, i == app.drawer_cursor);
        lines.push(Line::from(vec![
            Span::styled(marker, theme::accent()),
            Span::styled(format!("{:<width$}", screen.label(), width = 24), style),
        ]));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}
