//! Top app bar: menu affordance, fixed title, back hint.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![
        Span::styled(" ☰ ", theme::app_bar()),
        Span::styled("Example Drawer Navigation", theme::app_bar_title()),
    ];

    if app.scaffold.can_go_back() {
        spans.push(Span::styled("   esc:back", theme::app_bar()));
    }

    let para = Paragraph::new(Line::from(spans)).style(theme::app_bar());
    f.render_widget(para, area);
}
