//! Application state and logic

use participants_core::{
    is_valid_phone_number, strip_non_digits, CallList, Config, ParticipantListBinder,
    RowBinder,
};
use tracing::debug;

use crate::row::ParticipantRow;

/// Application state
pub struct App {
    /// Loaded call list; replaced wholesale on reload
    pub call_list: CallList,
    /// Current selection index
    pub current_index: usize,
    /// Search query
    pub search_query: String,
    /// Search results (row indices)
    pub search_results: Vec<usize>,
    /// Current search result index
    pub search_result_index: usize,
    /// Is search mode active
    pub search_mode: bool,
    /// Show help overlay
    pub show_help: bool,
    /// Live mode (reload on file change)
    pub live_mode: bool,
    /// Flag numbers failing validation
    pub mark_invalid: bool,
    /// Rows moved by page up/down
    pub page_size: usize,
    /// Error message to display
    pub error_message: Option<String>,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(call_list: CallList) -> Self {
        Self::with_config(call_list, &Config::default())
    }

    /// Create an app with settings taken from `config`
    pub fn with_config(call_list: CallList, config: &Config) -> Self {
        Self {
            call_list,
            current_index: 0,
            search_query: String::new(),
            search_results: Vec::new(),
            search_result_index: 0,
            search_mode: false,
            show_help: false,
            live_mode: config.live,
            mark_invalid: config.mark_invalid,
            page_size: config.page_size.max(1),
            error_message: None,
            status_message: None,
        }
    }

    /// Binder over the current list
    pub fn binder(&self) -> ParticipantListBinder<'_, ParticipantRow> {
        ParticipantListBinder::new(self.call_list.participants())
    }

    pub fn row_count(&self) -> usize {
        self.binder().row_count()
    }

    /// Raw number under the cursor
    pub fn current_number(&self) -> Option<&str> {
        self.call_list.participants().get(self.current_index)
    }

    /// Whether the row at `index` should be flagged
    pub fn is_flagged(&self, index: usize) -> bool {
        self.mark_invalid
            && self
                .call_list
                .participants()
                .get(index)
                .is_some_and(|raw| !is_valid_phone_number(raw))
    }

    /// Number of rows failing validation
    pub fn invalid_count(&self) -> usize {
        self.call_list
            .participants()
            .iter()
            .filter(|raw| !is_valid_phone_number(raw))
            .count()
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.current_index + 1 < self.row_count() {
            self.current_index += 1;
        }
    }

    /// Go to first row
    pub fn select_first(&mut self) {
        self.current_index = 0;
    }

    /// Go to last row
    pub fn select_last(&mut self) {
        self.current_index = self.row_count().saturating_sub(1);
    }

    /// Page up
    pub fn page_up(&mut self) {
        self.current_index = self.current_index.saturating_sub(self.page_size);
    }

    /// Page down
    pub fn page_down(&mut self) {
        self.current_index =
            (self.current_index + self.page_size).min(self.row_count().saturating_sub(1));
    }

    /// Toggle live mode
    pub fn toggle_live_mode(&mut self) {
        self.live_mode = !self.live_mode;
        if self.live_mode {
            self.status_message = Some("Live mode ON".to_string());
        } else {
            self.status_message = Some("Live mode OFF".to_string());
        }
    }

    /// Swap in a freshly loaded list, keeping the cursor in range
    pub fn replace_list(&mut self, call_list: CallList) {
        let previous = self.row_count();
        self.call_list = call_list;
        self.current_index = self.current_index.min(self.row_count().saturating_sub(1));
        self.search_results.clear();
        self.search_result_index = 0;
        self.error_message = None;

        debug!(previous, current = self.row_count(), "replaced call list");
        self.status_message = Some(format!("Reloaded {} number(s)", self.row_count()));
    }

    /// Start search mode
    pub fn start_search(&mut self) {
        self.search_mode = true;
        self.search_query.clear();
        self.search_results.clear();
    }

    /// Cancel search
    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.search_query.clear();
        self.search_results.clear();
    }

    /// Execute search.
    ///
    /// Only the digits of the query count, and they are matched against the
    /// digit string of each number, so `912-345` finds `+7 (912) 345-67-89`.
    pub fn execute_search(&mut self) {
        self.search_mode = false;
        self.search_result_index = 0;

        let needle = strip_non_digits(&self.search_query);
        if needle.is_empty() {
            self.search_results.clear();
            self.status_message = Some("Search needs at least one digit".to_string());
            return;
        }

        self.search_results = self
            .call_list
            .participants()
            .iter()
            .enumerate()
            .filter(|(_, raw)| strip_non_digits(raw).contains(&needle))
            .map(|(i, _)| i)
            .collect();

        debug!(query = %needle, matches = self.search_results.len(), "search");

        if let Some(&idx) = self.search_results.first() {
            self.current_index = idx;
            self.status_message = Some(format!("Found {} matches", self.search_results.len()));
        } else {
            self.status_message = Some("No matches found".to_string());
        }
    }

    /// Next search result
    pub fn next_search_result(&mut self) {
        if self.search_results.is_empty() {
            return;
        }

        self.search_result_index = (self.search_result_index + 1) % self.search_results.len();
        self.current_index = self.search_results[self.search_result_index];
    }

    /// Previous search result
    pub fn prev_search_result(&mut self) {
        if self.search_results.is_empty() {
            return;
        }

        if self.search_result_index == 0 {
            self.search_result_index = self.search_results.len() - 1;
        } else {
            self.search_result_index -= 1;
        }
        self.current_index = self.search_results[self.search_result_index];
    }

    /// Get display title for the app
    pub fn title(&self) -> String {
        format!("Participants: {}", self.call_list.name)
    }

    /// Get status line info
    pub fn status_info(&self) -> String {
        let count = self.row_count();
        let position = if count == 0 { 0 } else { self.current_index + 1 };
        let mut parts = vec![format!("Row {}/{}", position, count)];

        if self.mark_invalid {
            let invalid = self.invalid_count();
            if invalid > 0 {
                parts.push(format!("{} invalid", invalid));
            }
        }

        if self.live_mode {
            parts.push("LIVE".to_string());
        }

        if !self.search_results.is_empty() {
            parts.push(format!(
                "Match {}/{}",
                self.search_result_index + 1,
                self.search_results.len()
            ));
        }

        parts.join(" | ")
    }
}
