//! Display row for the participant list

use participants_core::TextRow;
use ratatui::{
    prelude::*,
    widgets::ListItem,
};

/// One visible list entry holding a formatted number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantRow {
    text: String,
}

impl TextRow for ParticipantRow {
    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn text(&self) -> &str {
        &self.text
    }
}

impl ParticipantRow {
    /// Build the list item: `[marker] [position] [number]`
    pub fn to_list_item(&self, position: usize, flagged: bool) -> ListItem<'static> {
        let marker = if flagged {
            Span::styled("! ", Style::default().fg(Color::Red).bold())
        } else {
            Span::raw("  ")
        };

        let number_style = if flagged {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        // Digit-free input formats to nothing
        let number = if self.text.is_empty() {
            Span::styled("(empty)", Style::default().fg(Color::DarkGray).italic())
        } else {
            Span::styled(self.text.clone(), number_style)
        };

        ListItem::new(Line::from(vec![
            marker,
            Span::styled(format!("{:>4} ", position + 1), Style::default().fg(Color::DarkGray)),
            number,
        ]))
    }
}
