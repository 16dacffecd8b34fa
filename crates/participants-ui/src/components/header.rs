//! Header component

use participants_core::ListStatus;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

/// Render the header
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let list = &app.call_list;

    let status_color = match list.status {
        ListStatus::Active => Color::Green,
        ListStatus::Paused => Color::Yellow,
        ListStatus::Completed => Color::DarkGray,
    };

    let mut spans = vec![
        Span::styled(app.title(), Style::default().fg(Color::Cyan).bold()),
        Span::raw(" │ "),
        Span::styled(list.status.name(), Style::default().fg(status_color)),
    ];

    if let Some(created) = list.format_created() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("created {}", created),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if app.live_mode {
        spans.push(Span::styled(" LIVE", Style::default().fg(Color::Green).bold()));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}
