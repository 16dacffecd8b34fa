//! participants - terminal viewer for auto-dialer participant lists

mod cli;
mod logging;

use std::io::{stdout, Write};
use std::path::Path;
use std::time::{Instant, SystemTime};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::TestBackend, prelude::*};
use serde::Serialize;
use tracing::{debug, info, warn};

use cli::Cli;
use participants_core::{
    is_valid_phone_number, load_call_list, CallList, Config, ParticipantListBinder,
    ParticipantsError, RowBinder, TextRow,
};
use participants_ui::{
    components::{
        render_footer, render_header, render_help_overlay, render_list_pane, render_search_input,
    },
    event::{handle_event, AppAction},
    App, ParticipantRow,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.as_deref(), cli.is_interactive())?;

    let config = load_config(&cli)?;
    let call_list = open_call_list(&cli.file)?;

    if cli.print {
        let mut out = stdout().lock();
        print_list(&mut out, &call_list, cli.json)?;
        out.flush()?;
        return Ok(());
    }

    let app = App::with_config(call_list, &config);

    if cli.screenshot {
        return run_screenshot(&app, cli.width, cli.height);
    }

    run_tui(app, &cli.file, &config)
}

/// Load config: defaults, then the config file, then CLI flags
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?,
        None => Config::default(),
    };
    config.live = config.live || cli.live;
    debug!(?config, "configuration loaded");
    Ok(config)
}

/// Load the call list, exiting with a hint when the file is missing
fn open_call_list(path: &Path) -> Result<CallList> {
    match load_call_list(path) {
        Ok(list) => Ok(list),
        Err(ParticipantsError::NotFound(path)) => {
            eprintln!("Call list not found at: {}", path.display());
            eprintln!("Pass a .json call list or a text file with one number per line");
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Failed to load call list"),
    }
}

#[derive(Serialize)]
struct PrintedRow<'a> {
    raw: &'a str,
    formatted: &'a str,
    valid: bool,
}

/// Write every row, formatted, one per line or as a JSON array
fn print_list<W: Write>(out: &mut W, call_list: &CallList, json: bool) -> Result<()> {
    let participants = call_list.participants();
    let rows = ParticipantListBinder::<ParticipantRow>::new(participants).rows();

    if json {
        let printed: Vec<PrintedRow> = participants
            .iter()
            .zip(rows.iter())
            .map(|(raw, row)| PrintedRow {
                raw,
                formatted: row.text(),
                valid: is_valid_phone_number(raw),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &printed)?;
        writeln!(out)?;
    } else {
        for row in &rows {
            writeln!(out, "{}", row.text())?;
        }
    }

    Ok(())
}

/// Tracks the list file's modification time between polls
struct FileWatch<'a> {
    path: &'a Path,
    last_modified: Option<SystemTime>,
}

impl<'a> FileWatch<'a> {
    fn new(path: &'a Path) -> Self {
        Self {
            path,
            last_modified: modified_at(path),
        }
    }

    /// Record the current mtime and report whether it moved since the last call
    fn changed(&mut self) -> bool {
        let modified = modified_at(self.path);
        if modified == self.last_modified {
            return false;
        }
        self.last_modified = modified;
        true
    }

    /// Accept the current mtime without reporting a change
    fn mark_seen(&mut self) {
        self.last_modified = modified_at(self.path);
    }
}

/// Modification time of the list file, if readable
fn modified_at(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Re-read the list file and hand the new list to the app
fn reload(app: &mut App, path: &Path) {
    match load_call_list(path) {
        Ok(list) => {
            info!(path = %path.display(), count = list.participants().len(), "reloaded call list");
            app.replace_list(list);
        }
        Err(e) => {
            warn!(error = %e, "reload failed");
            app.error_message = Some(format!("Reload failed: {}", e));
        }
    }
}

/// Run the TUI application
fn run_tui(mut app: App, path: &Path, config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, path, config);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    path: &Path,
    config: &Config,
) -> Result<()> {
    let poll_interval = config.poll_interval();
    let mut last_poll = Instant::now();
    let mut watch = FileWatch::new(path);

    loop {
        terminal.draw(|frame| ui(frame, app))?;

        let timeout = if app.live_mode {
            poll_interval.min(std::time::Duration::from_millis(100))
        } else {
            std::time::Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            let action = handle_event(event, app.search_mode);

            match action {
                AppAction::Quit => break,
                AppAction::SelectPrev => app.select_prev(),
                AppAction::SelectNext => app.select_next(),
                AppAction::SelectFirst => app.select_first(),
                AppAction::SelectLast => app.select_last(),
                AppAction::PageUp => app.page_up(),
                AppAction::PageDown => app.page_down(),
                AppAction::StartSearch => app.start_search(),
                AppAction::CancelSearch => app.cancel_search(),
                AppAction::SubmitSearch => app.execute_search(),
                AppAction::SearchInput(c) => app.search_query.push(c),
                AppAction::SearchBackspace => {
                    app.search_query.pop();
                }
                AppAction::NextSearchResult => app.next_search_result(),
                AppAction::PrevSearchResult => app.prev_search_result(),
                AppAction::ToggleHelp => app.show_help = !app.show_help,
                AppAction::ToggleLiveMode => app.toggle_live_mode(),
                AppAction::Reload => {
                    reload(app, path);
                    watch.mark_seen();
                }
                AppAction::Redraw => {
                    terminal.clear()?;
                }
                AppAction::None => {}
            }
        }

        // Live mode: reload when the file's mtime moves
        if app.live_mode && last_poll.elapsed() >= poll_interval {
            last_poll = Instant::now();
            if watch.changed() {
                reload(app, path);
            }
        }
    }

    Ok(())
}

/// Run screenshot mode: render one frame and write it to stdout
fn run_screenshot(app: &App, width: u16, height: u16) -> Result<()> {
    let screen = render_screen(app, width, height)?;
    let mut out = stdout().lock();
    out.write_all(screen.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Render one frame off-screen as plain text, one line per terminal row
fn render_screen(app: &App, width: u16, height: u16) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| ui(frame, app))?;

    let buffer = terminal.backend().buffer();
    let mut screen = String::with_capacity((width as usize + 1) * height as usize);
    for y in 0..height {
        let line: String = (0..width).map(|x| buffer[(x, y)].symbol()).collect();
        screen.push_str(line.trim_end());
        screen.push('\n');
    }
    Ok(screen)
}

/// Render the UI
fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // List
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_list_pane(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);

    if app.search_mode {
        render_search_input(frame, app);
    }

    if app.show_help {
        render_help_overlay(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use participants_core::ParticipantList;
    use std::time::Duration;

    fn campaign(numbers: &[&str]) -> CallList {
        let list: ParticipantList = numbers.iter().copied().collect();
        CallList::new("1", "Campanha", list)
    }

    #[test]
    fn test_ui_renders_header_list_and_footer() {
        let app = App::new(campaign(&["+7 (912) 345-67-89", "123"]));
        let screen = render_screen(&app, 60, 12).unwrap();

        assert!(screen.contains("Participants: Campanha"));
        assert!(screen.contains("79 12345-6789"));
        assert!(screen.contains("Row 1/2 | 1 invalid"));
        assert_eq!(screen.lines().count(), 12);
    }

    #[test]
    fn test_print_plain_lines() {
        let mut out = Vec::new();
        print_list(&mut out, &campaign(&["+7 (912) 345-67-89", "123"]), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "79 12345-6789\n123\n");
    }

    #[test]
    fn test_print_json_rows() {
        let mut out = Vec::new();
        print_list(&mut out, &campaign(&["+7 (912) 345-67-89", "123"]), true).unwrap();

        let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            rows,
            serde_json::json!([
                {"raw": "+7 (912) 345-67-89", "formatted": "79 12345-6789", "valid": true},
                {"raw": "123", "formatted": "123", "valid": false},
            ])
        );
    }

    #[test]
    fn test_print_empty_list() {
        let mut out = Vec::new();
        print_list(&mut out, &campaign(&[]), false).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_reload_replaces_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.txt");
        std::fs::write(&path, "11999999999\n9123456789\n123\n").unwrap();

        let mut app = App::new(campaign(&["11999999999"]));
        app.error_message = Some("Reload failed: earlier".to_string());

        reload(&mut app, &path);
        assert_eq!(app.row_count(), 3);
        assert_eq!(app.call_list.name, "leads");
        assert_eq!(app.error_message, None);
        assert_eq!(app.status_message.as_deref(), Some("Reloaded 3 number(s)"));
    }

    #[test]
    fn test_reload_keeps_old_list_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(campaign(&["11999999999"]));

        reload(&mut app, &dir.path().join("gone.txt"));
        assert_eq!(app.row_count(), 1);
        assert!(app.error_message.as_deref().unwrap().starts_with("Reload failed"));
    }

    #[test]
    fn test_file_watch_detects_mtime_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.txt");
        std::fs::write(&path, "11999999999\n").unwrap();

        let mut watch = FileWatch::new(&path);
        assert!(!watch.changed());

        std::fs::write(&path, "11999999999\n9123456789\n").unwrap();
        let file = std::fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000))
            .unwrap();
        drop(file);

        assert!(watch.changed());
        assert!(!watch.changed());

        let mut app = App::new(campaign(&["11999999999"]));
        reload(&mut app, &path);
        assert_eq!(app.row_count(), 2);
    }

    #[test]
    fn test_file_watch_mark_seen_swallows_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.txt");
        std::fs::write(&path, "1\n").unwrap();

        let mut watch = FileWatch::new(&path);
        let file = std::fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000))
            .unwrap();
        drop(file);

        watch.mark_seen();
        assert!(!watch.changed());
    }

    #[test]
    fn test_file_watch_reports_deletion() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.txt");
        std::fs::write(&path, "1\n").unwrap();

        let mut watch = FileWatch::new(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(watch.changed());
    }

    #[test]
    fn test_live_flag_reaches_app() {
        let cli = Cli::try_parse_from(["participants", "leads.txt", "--live"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert!(config.live);

        let app = App::with_config(campaign(&["1"]), &config);
        assert!(app.live_mode);
    }
}
