// ABOUTME: State management for the check-in wizard
// Tracks current step, search input, results and the visitor being checked in

use std::fmt;

use crate::directory::VisitorQuery;
use crate::models::{CheckInReceipt, VisitorRecord};
use thiserror::Error;

/// Steps in the check-in wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Welcome,
    Search,
    Confirm,
    Complete,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[Self::Welcome, Self::Search, Self::Confirm, Self::Complete]
    }

    /// Get the step number (1-indexed for display)
    pub const fn number(&self) -> usize {
        match self {
            Self::Welcome => 1,
            Self::Search => 2,
            Self::Confirm => 3,
            Self::Complete => 4,
        }
    }

    pub const fn total() -> usize {
        4
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Search => "Find Visit",
            Self::Confirm => "Confirm",
            Self::Complete => "Done",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Welcome => "Scan your invitation or search for your visit",
            Self::Search => "Select your visit from the list",
            Self::Confirm => "Check your details before checking in",
            Self::Complete => "You're checked in!",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Why a wizard action was refused. A refused action never changes state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please wait, a request is already in progress")]
    Busy,

    #[error("Enter a name, company, email or phone number to search")]
    EmptyQuery,

    #[error("No visitor records are available")]
    NoRecords,

    #[error("No visitor selected")]
    NoSelection,

    #[error("Result {index} is out of range ({len} results)")]
    ResultOutOfRange { index: usize, len: usize },

    #[error("'{action}' is not available on the {step} step")]
    NotAvailable { action: &'static str, step: WizardStep },
}

/// Full check-in wizard state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// Current step in the wizard
    pub step: WizardStep,
    /// Free-text search input
    pub query: String,
    /// Cursor position in `query`, in characters
    pub cursor_position: usize,
    /// Records matching the submitted query
    pub results: Vec<VisitorRecord>,
    /// Highlighted row in `results`
    pub highlighted: usize,
    /// Visitor being checked in
    pub selected: Option<VisitorRecord>,
    /// Step that led into Confirm (Welcome for scans, Search for selections)
    pub confirm_origin: Option<WizardStep>,
    /// Receipt of the finished check-in
    pub receipt: Option<CheckInReceipt>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Welcome,
            query: String::new(),
            cursor_position: 0,
            results: Vec::new(),
            highlighted: 0,
            selected: None,
            confirm_origin: None,
            receipt: None,
        }
    }

    fn require(&self, step: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.step == step {
            Ok(())
        } else {
            Err(WizardError::NotAvailable {
                action,
                step: self.step,
            })
        }
    }

    /// Check that a scan may start
    pub fn ensure_can_scan(&self) -> Result<(), WizardError> {
        self.require(WizardStep::Welcome, "scan")
    }

    /// Check that the current input may be submitted and build its query
    pub fn search_query(&self) -> Result<VisitorQuery, WizardError> {
        self.require(WizardStep::Welcome, "search")?;
        if self.query.trim().is_empty() {
            return Err(WizardError::EmptyQuery);
        }
        Ok(VisitorQuery::text(&self.query))
    }

    /// Visitor that a check-in would apply to
    pub fn check_in_candidate(&self) -> Result<&VisitorRecord, WizardError> {
        self.require(WizardStep::Confirm, "check in")?;
        self.selected.as_ref().ok_or(WizardError::NoSelection)
    }

    /// Welcome -> Search with the given results (possibly empty)
    pub fn show_results(&mut self, results: Vec<VisitorRecord>) {
        self.results = results;
        self.highlighted = 0;
        self.step = WizardStep::Search;
    }

    /// Welcome -> Confirm with the scanned visitor
    pub fn confirm_scanned(&mut self, record: VisitorRecord) {
        self.selected = Some(record);
        self.confirm_origin = Some(WizardStep::Welcome);
        self.step = WizardStep::Confirm;
    }

    /// Search -> Confirm with the result at `index`
    pub fn select_result(&mut self, index: usize) -> Result<(), WizardError> {
        self.require(WizardStep::Search, "select")?;
        let record = self
            .results
            .get(index)
            .cloned()
            .ok_or(WizardError::ResultOutOfRange {
                index,
                len: self.results.len(),
            })?;

        self.highlighted = index;
        self.selected = Some(record);
        self.confirm_origin = Some(WizardStep::Search);
        self.step = WizardStep::Confirm;
        Ok(())
    }

    /// Confirm -> Complete
    pub fn complete(&mut self, receipt: CheckInReceipt) {
        self.receipt = Some(receipt);
        self.step = WizardStep::Complete;
    }

    /// Move to the previous step. Returns false when there is nowhere to go.
    pub fn go_back(&mut self) -> bool {
        match self.step {
            WizardStep::Welcome | WizardStep::Complete => false,
            WizardStep::Search => {
                self.clear_search();
                self.step = WizardStep::Welcome;
                true
            }
            WizardStep::Confirm => {
                self.selected = None;
                let origin = self.confirm_origin.take().unwrap_or(WizardStep::Welcome);
                if origin == WizardStep::Welcome {
                    self.clear_search();
                }
                self.step = origin;
                true
            }
        }
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.step, WizardStep::Search | WizardStep::Confirm)
    }

    /// Back to Welcome with every transient value cleared
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn clear_search(&mut self) {
        self.query.clear();
        self.cursor_position = 0;
        self.results.clear();
        self.highlighted = 0;
    }

    /// Currently highlighted result
    pub fn highlighted_result(&self) -> Option<&VisitorRecord> {
        self.results.get(self.highlighted)
    }

    pub fn highlight_next(&mut self) {
        if !self.results.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.results.len();
        }
    }

    pub fn highlight_previous(&mut self) {
        if !self.results.is_empty() {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(self.results.len() - 1);
        }
    }

    fn byte_index(&self) -> usize {
        self.query
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.query.len(), |(i, _)| i)
    }

    fn query_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Handle text input character
    pub fn input_char(&mut self, c: char) {
        if self.step == WizardStep::Welcome {
            let at = self.byte_index();
            self.query.insert(at, c);
            self.cursor_position += 1;
        }
    }

    /// Handle backspace
    pub fn backspace(&mut self) {
        if self.step == WizardStep::Welcome && self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index();
            self.query.remove(at);
        }
    }

    /// Handle delete key
    pub fn delete(&mut self) {
        if self.step == WizardStep::Welcome && self.cursor_position < self.query_len() {
            let at = self.byte_index();
            self.query.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_position < self.query_len() {
            self.cursor_position += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_position = self.query_len();
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
