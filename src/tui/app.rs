//! Picker application state management.

use crate::printer::render_outcome;
use crate::runner::{RunError, RunOutcome};

/// Application state for the picker TUI
#[derive(Debug)]
pub struct App {
    /// Selection names discovered in the scripts directory
    pub algorithms: Vec<String>,
    /// Cursor position in the algorithm list
    pub cursor: usize,
    /// Index of the marked (radio-selected) algorithm
    pub marked: Option<usize>,
    /// Whether an execution cycle is in flight
    pub is_running: bool,
    /// Selection shown by the loading indicator
    pub running_name: String,
    /// Rendered results panel content
    pub results: Vec<String>,
    /// Whether the results panel shows an error notification
    pub result_is_error: bool,
    /// Scroll offset for the results panel
    pub results_scroll: usize,
    /// Status message to display
    pub status_message: String,
    /// Whether to show help
    pub show_help: bool,
    /// Indent structured results
    pub pretty: bool,
    /// Timestamp of last Ctrl+C press for double Ctrl+C detection
    pub last_ctrl_c_time: Option<std::time::Instant>,
}

const STATUS_IDLE: &str = "↑/↓ move, space mark, enter run, r rescan, q quit | F1 help";

impl App {
    pub fn new(algorithms: Vec<String>, pretty: bool) -> Self {
        Self {
            algorithms,
            cursor: 0,
            marked: None,
            is_running: false,
            running_name: String::new(),
            results: Vec::new(),
            result_is_error: false,
            results_scroll: 0,
            status_message: STATUS_IDLE.to_string(),
            show_help: false,
            pretty,
            last_ctrl_c_time: None,
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.algorithms.len() {
            self.cursor += 1;
        }
    }

    /// Radio semantics: marking one entry unmarks the others; marking the
    /// marked entry clears it.
    pub fn toggle_mark(&mut self) {
        if self.algorithms.is_empty() {
            return;
        }
        self.marked = if self.marked == Some(self.cursor) {
            None
        } else {
            Some(self.cursor)
        };
    }

    pub fn marked_selection(&self) -> Option<String> {
        self.marked.and_then(|i| self.algorithms.get(i).cloned())
    }

    /// Trigger accepted: loading indicator up, previous results cleared.
    pub fn begin_run(&mut self, name: &str) {
        self.is_running = true;
        self.running_name = name.to_string();
        self.results.clear();
        self.result_is_error = false;
        self.results_scroll = 0;
        self.status_message = format!("Running {}…", name);
    }

    /// The loading indicator comes down on every settle path.
    pub fn finish_run(&mut self) {
        self.is_running = false;
        self.running_name.clear();
        self.status_message = STATUS_IDLE.to_string();
    }

    pub fn show_outcome(&mut self, outcome: &RunOutcome) {
        self.results = render_outcome(outcome, self.pretty);
        self.result_is_error = false;
        self.results_scroll = 0;
    }

    pub fn show_error(&mut self, err: &RunError) {
        self.results = vec![format!("Error: {}", err)];
        self.result_is_error = true;
        self.results_scroll = 0;
        self.status_message = "Execution failed (details in results)".to_string();
    }

    /// Replace the algorithm list after a rescan, keeping the mark on the
    /// same name when it survives.
    pub fn set_algorithms(&mut self, algorithms: Vec<String>) {
        let marked_name = self.marked_selection();
        self.algorithms = algorithms;
        self.cursor = self.cursor.min(self.algorithms.len().saturating_sub(1));
        self.marked = marked_name.and_then(|name| self.algorithms.iter().position(|a| *a == name));
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn scroll_results_up(&mut self) {
        if self.results_scroll > 0 {
            self.results_scroll -= 1;
        }
    }

    pub fn scroll_results_down(&mut self) {
        if self.results_scroll + 1 < self.results.len() {
            self.results_scroll += 1;
        }
    }

    /// Handle Ctrl+C press and detect double press for quit.
    /// Returns true if should quit (double Ctrl+C), false otherwise.
    pub fn handle_ctrl_c(&mut self) -> bool {
        const DOUBLE_CTRL_C_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(500);

        let now = std::time::Instant::now();

        if let Some(last_time) = self.last_ctrl_c_time {
            if now.duration_since(last_time) <= DOUBLE_CTRL_C_TIMEOUT {
                self.last_ctrl_c_time = None;
                return true;
            }
        }

        // Single Ctrl+C clears the mark and hints at the double press
        self.marked = None;
        self.status_message = "Press Ctrl+C again to quit".to_string();
        self.last_ctrl_c_time = Some(now);

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_is_exclusive_and_toggles() {
        let mut app = App::new(vec!["a".into(), "b".into()], true);
        app.toggle_mark();
        assert_eq!(app.marked_selection().as_deref(), Some("a"));
        app.move_down();
        app.toggle_mark();
        assert_eq!(app.marked_selection().as_deref(), Some("b"));
        app.toggle_mark();
        assert_eq!(app.marked_selection(), None);
    }

    #[test]
    fn rescan_keeps_mark_by_name() {
        let mut app = App::new(vec!["a".into(), "b".into(), "c".into()], true);
        app.move_down();
        app.toggle_mark();
        app.set_algorithms(vec!["b".into(), "c".into()]);
        assert_eq!(app.marked_selection().as_deref(), Some("b"));

        app.set_algorithms(vec!["c".into()]);
        assert_eq!(app.marked_selection(), None);
    }

    #[test]
    fn begin_run_clears_previous_results() {
        let mut app = App::new(vec!["a".into()], true);
        app.results = vec!["old".into()];
        app.begin_run("a");
        assert!(app.is_running);
        assert!(app.results.is_empty());
        app.finish_run();
        assert!(!app.is_running);
    }
}
