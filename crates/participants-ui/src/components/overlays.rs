//! Help overlay

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::event::HELP_TEXT;

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect(50, 80, frame.area());

    // Clear background
    frame.render_widget(Clear, area);

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(help, area);
}

/// Helper to create a centered rect with percentage width and height
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let width = r.width * percent_x / 100;
    let height = r.height * percent_y / 100;
    let x = (r.width - width) / 2;
    let y = (r.height - height) / 2;

    Rect::new(r.x + x, r.y + y, width, height)
}
