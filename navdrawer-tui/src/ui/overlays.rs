//! Overlay widgets: welcome, shell event log.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-frame welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    // Tall enough for the whole key guide on a 24-row terminal.
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::overlay_border())
        .title(" Welcome ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  m       open or close the drawer",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  j/k     move between destinations",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  enter   go to the selected screen",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  esc     back (closes the drawer first)",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  e       show the shell event log",
            theme::muted(),
        )),
        Line::from(Span::styled("  q       quit", theme::muted())),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::accent())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Shell event log overlay: everything the scaffold published, newest
/// first.
pub fn render_event_log(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::overlay_border())
        .title(format!(
            " Event Log ({}) [Esc]close [j/k]scroll ",
            app.event_history.len()
        ))
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.event_history.is_empty() {
        let text = Paragraph::new(Span::styled("No shell events yet.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.event_scroll;
    let end = (start + visible_height).min(app.event_history.len());

    let mut lines: Vec<Line> = Vec::new();
    for i in start..end {
        let record = &app.event_history[i];
        let is_active = i == app.event_scroll;
        let style = if is_active {
            theme::accent().add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", record.timestamp.format("%H:%M:%S")),
                theme::muted(),
            ),
            Span::styled(record.event.describe(), style),
        ]));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}
