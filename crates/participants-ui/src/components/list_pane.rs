//! List pane component showing formatted participant numbers

use participants_core::RowBinder;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::App;

/// Render the list pane.
///
/// Rows are materialized through the app's binder, so what is shown is
/// always the formatted form of the backing list.
pub fn render_list_pane(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" Numbers ({}) ", app.row_count()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let binder = app.binder();

    if binder.row_count() == 0 {
        let empty = Paragraph::new("No numbers in this list")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = binder
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| row.to_list_item(i, app.is_flagged(i)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.current_index));

    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use participants_core::{CallList, ParticipantList};
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|frame| render_list_pane(frame, frame.area(), app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_formatted_numbers() {
        let list: ParticipantList = ["+7 (912) 345-67-89", "9123456789", "123"]
            .into_iter()
            .collect();
        let app = App::new(CallList::new("1", "Campanha", list));
        let screen = render(&app);

        assert!(screen.contains("Numbers (3)"));
        assert!(screen.contains("79 12345-6789"));
        assert!(screen.contains("91 2345-6789"));
        assert!(screen.contains("! "));
        assert!(!screen.contains("+7 (912)"));
    }

    #[test]
    fn test_renders_empty_list() {
        let app = App::new(CallList::new("1", "Vazia", ParticipantList::default()));
        let screen = render(&app);
        assert!(screen.contains("No numbers in this list"));
    }
}
