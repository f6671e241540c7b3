//! Bottom status bar: key hints for the current focus, last shell event.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let hints = if app.drawer_captures_input() {
        " j/k:move  enter:select  1-3:jump  esc:close"
    } else {
        " m:menu  esc:back  e:events  q:quit"
    };

    let mut spans: Vec<Span> = vec![Span::styled(hints, theme::muted())];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), theme::accent()));
    }

    let para = Paragraph::new(Line::from(spans));
    f.render_widget(para, area);
}
