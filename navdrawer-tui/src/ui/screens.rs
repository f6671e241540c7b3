//! Screen host: the placeholder body of whichever screen is active.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let screen = app.scaffold.current_screen();

    let mut lines = vec![Line::from(Span::styled(
        screen.body(),
        theme::screen_text(),
    ))];

    // A muted breadcrumb of the stack behind this screen, so back
    // behavior is visible without pressing anything.
    if app.scaffold.can_go_back() {
        let trail: Vec<&str> = app
            .scaffold
            .back_stack()
            .iter()
            .map(|s| s.label())
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("back: {}", trail.join(" / ")),
            theme::muted(),
        )));
    }

    let block = Block::default().padding(Padding::new(2, 2, 1, 1));
    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}
