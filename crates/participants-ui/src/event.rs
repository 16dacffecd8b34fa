//! Event handling for the TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions that can be triggered by events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Quit the application
    Quit,
    /// Move selection up
    SelectPrev,
    /// Move selection down
    SelectNext,
    /// Go to first row
    SelectFirst,
    /// Go to last row
    SelectLast,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Start search
    StartSearch,
    /// Cancel search
    CancelSearch,
    /// Submit search
    SubmitSearch,
    /// Search input character
    SearchInput(char),
    /// Search backspace
    SearchBackspace,
    /// Next search result
    NextSearchResult,
    /// Previous search result
    PrevSearchResult,
    /// Toggle help overlay
    ToggleHelp,
    /// Toggle live mode
    ToggleLiveMode,
    /// Reload the list from disk
    Reload,
    /// Redraw screen
    Redraw,
    /// No action
    None,
}

/// Handle a terminal event and return the corresponding action
pub fn handle_event(event: Event, search_mode: bool) -> AppAction {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(key, search_mode),
        Event::Resize(_, _) => AppAction::Redraw,
        _ => AppAction::None,
    }
}

/// Handle a key event
fn handle_key(key: KeyEvent, search_mode: bool) -> AppAction {
    if search_mode {
        return handle_search_key(key);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('l') => AppAction::Redraw,
            KeyCode::Char('u') => AppAction::PageUp,
            KeyCode::Char('d') => AppAction::PageDown,
            _ => AppAction::None,
        };
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,

        // Navigation (vim-style)
        KeyCode::Char('j') | KeyCode::Down => AppAction::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => AppAction::SelectPrev,
        KeyCode::Char('g') | KeyCode::Home => AppAction::SelectFirst,
        KeyCode::Char('G') | KeyCode::End => AppAction::SelectLast,
        KeyCode::PageUp => AppAction::PageUp,
        KeyCode::PageDown => AppAction::PageDown,

        // Search
        KeyCode::Char('/') => AppAction::StartSearch,
        KeyCode::Char('n') => AppAction::NextSearchResult,
        KeyCode::Char('N') => AppAction::PrevSearchResult,

        // Other
        KeyCode::Char('?') => AppAction::ToggleHelp,
        KeyCode::Char('L') => AppAction::ToggleLiveMode,
        KeyCode::Char('R') => AppAction::Reload,
        KeyCode::Char('r') => AppAction::Redraw,

        _ => AppAction::None,
    }
}

/// Handle key events in search mode
fn handle_search_key(key: KeyEvent) -> AppAction {
    match key.code {
        KeyCode::Esc => AppAction::CancelSearch,
        KeyCode::Enter => AppAction::SubmitSearch,
        KeyCode::Backspace => AppAction::SearchBackspace,
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' | 'g' => AppAction::CancelSearch,
                    _ => AppAction::None,
                }
            } else {
                AppAction::SearchInput(c)
            }
        }
        _ => AppAction::None,
    }
}

/// Key binding help text
pub const HELP_TEXT: &str = r#"
╭─────────────────────────────────────────╮
│              participants               │
│              Key Bindings               │
├─────────────────────────────────────────┤
│                                         │
│  Navigation                             │
│  ─────────                              │
│  j/k, ↑/↓    Move selection up/down     │
│  g/G         Go to first/last number    │
│  PgUp/PgDn   Page up/down               │
│                                         │
│  Search                                 │
│  ──────                                 │
│  /           Search by digits           │
│  n/N         Next/prev search result    │
│  Esc         Cancel search              │
│                                         │
│  Other                                  │
│  ─────                                  │
│  L           Toggle live mode           │
│  R           Reload list from disk      │
│  r           Redraw screen              │
│  ?           Show this help             │
│  q, Esc      Quit                       │
│                                         │
╰─────────────────────────────────────────╯
"#;
