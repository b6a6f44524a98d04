//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Budget data lives in a [`BudgetState`] that only changes through events.

use crate::config::Settings;
use crate::display::DisplayOptions;
use crate::models::{SpendingRecord, SummaryId};
use crate::services::{fetch_event, BudgetEvent, BudgetState};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Categories with spent / allocated, expandable
    #[default]
    Budget,
    /// Flat list of every fetched record
    Transactions,
}

impl ActiveView {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Budget => "Budgets",
            Self::Transactions => "Transactions",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Formatting preferences derived from the settings
    pub display: DisplayOptions,

    /// Name of the data source, for the status bar
    pub source_name: String,

    /// Category summaries and expansion set
    pub budget: BudgetState,

    /// Records from the last successful fetch, for the transactions view
    pub records: Vec<SpendingRecord>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected summary index in the budget view
    pub selected_summary_index: usize,

    /// Selected record index in the transactions view
    pub selected_record_index: usize,

    /// A fetch has been started and not yet reported back
    pub fetch_in_flight: bool,

    /// Set when the user asked for a refresh; the event loop starts the fetch
    pub refresh_requested: bool,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, budget: BudgetState, source_name: impl Into<String>) -> Self {
        Self {
            settings,
            display: DisplayOptions::from(settings),
            source_name: source_name.into(),
            budget,
            records: Vec::new(),
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            selected_summary_index: 0,
            selected_record_index: 0,
            fetch_in_flight: false,
            refresh_requested: false,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Cycle between the two views
    pub fn next_view(&mut self) {
        self.switch_view(match self.active_view {
            ActiveView::Budget => ActiveView::Transactions,
            ActiveView::Transactions => ActiveView::Budget,
        });
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Number of selectable rows in the current view
    fn row_count(&self) -> usize {
        match self.active_view {
            ActiveView::Budget => self.budget.summaries().len(),
            ActiveView::Transactions => self.records.len(),
        }
    }

    /// Move selection up in the current view
    pub fn move_up(&mut self) {
        let index = match self.active_view {
            ActiveView::Budget => &mut self.selected_summary_index,
            ActiveView::Transactions => &mut self.selected_record_index,
        };
        *index = index.saturating_sub(1);
    }

    /// Move selection down in the current view
    pub fn move_down(&mut self) {
        let max = self.row_count();
        let index = match self.active_view {
            ActiveView::Budget => &mut self.selected_summary_index,
            ActiveView::Transactions => &mut self.selected_record_index,
        };
        if *index < max.saturating_sub(1) {
            *index += 1;
        }
    }

    /// Id of the summary under the cursor
    pub fn selected_summary_id(&self) -> Option<SummaryId> {
        self.budget
            .summaries()
            .get(self.selected_summary_index)
            .map(|s| s.id())
    }

    /// Expand or collapse the selected category
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_summary_id() {
            self.budget.apply(BudgetEvent::ToggleExpansion(id));
        }
    }

    pub fn expand_all(&mut self) {
        self.budget.apply(BudgetEvent::ExpandAll);
    }

    pub fn collapse_all(&mut self) {
        self.budget.apply(BudgetEvent::CollapseAll);
    }

    /// Ask for a refresh. Ignored while a fetch is still running.
    pub fn request_refresh(&mut self) -> bool {
        if self.fetch_in_flight {
            self.set_status("Refresh already in progress");
            return false;
        }
        self.fetch_in_flight = true;
        self.refresh_requested = true;
        self.set_status(format!("Fetching from {}...", self.source_name));
        true
    }

    /// Take the pending refresh request, if any
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    /// Record the outcome of a fetch
    pub fn finish_fetch(&mut self, outcome: Result<Vec<SpendingRecord>, String>) {
        self.fetch_in_flight = false;

        match &outcome {
            Ok(records) => {
                self.records = records.clone();
                self.set_status(format!("Loaded {} records", records.len()));
            }
            Err(_) => {
                self.set_status("Refresh failed; showing previous data");
            }
        }
        self.budget.apply(fetch_event(outcome));
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let summaries = self.budget.summaries().len();
        self.selected_summary_index = self.selected_summary_index.min(summaries.saturating_sub(1));
        self.selected_record_index = self
            .selected_record_index
            .min(self.records.len().saturating_sub(1));
    }
}
