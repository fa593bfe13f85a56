// ABOUTME: Drives the check-in wizard, running scan/search/check-in as cancellable requests
// Each request gets an id; a completion is applied only while its id is still the
// one in flight, so late results after back/reset never touch the wizard.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::state::{WizardError, WizardState, WizardStep};
use crate::directory::{VisitorDirectory, VisitorQuery};
use crate::models::{CheckInReceipt, VisitorRecord};

pub type RequestId = u64;

const DEFAULT_LATENCY_MS: u64 = 800;

/// Kinds of request that take simulated network time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Scan,
    Search,
    CheckIn,
}

/// Result produced by a finished request
#[derive(Debug)]
pub enum Outcome {
    Scanned(Option<VisitorRecord>),
    SearchResults(Vec<VisitorRecord>),
    CheckedIn(CheckInReceipt),
}

#[derive(Debug)]
pub struct Completion {
    pub request_id: RequestId,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSettings {
    /// Artificial delay standing in for a backend round-trip
    pub latency: Duration,
    /// Record a scan resolves to; the first record when unset or unknown
    pub scan_record_id: Option<String>,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            scan_record_id: None,
        }
    }
}

struct InFlight {
    id: RequestId,
    kind: RequestKind,
    handle: JoinHandle<()>,
}

/// Owns the wizard state and the single in-flight request.
///
/// Starting a request spawns a tokio task, so `scan`, `submit_search` and
/// `check_in` must be called from within a tokio runtime.
pub struct WizardController {
    state: WizardState,
    directory: Arc<dyn VisitorDirectory>,
    settings: WizardSettings,
    next_request_id: RequestId,
    in_flight: Option<InFlight>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
}

impl WizardController {
    pub fn new(directory: Arc<dyn VisitorDirectory>, settings: WizardSettings) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            state: WizardState::new(),
            directory,
            settings,
            next_request_id: 0,
            in_flight: None,
            completion_tx,
            completion_rx,
        }
    }

    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    pub const fn step(&self) -> WizardStep {
        self.state.step
    }

    pub const fn settings(&self) -> &WizardSettings {
        &self.settings
    }

    /// Whether a request is in flight
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn pending_request(&self) -> Option<RequestKind> {
        self.in_flight.as_ref().map(|f| f.kind)
    }

    fn ensure_idle(&self) -> Result<(), WizardError> {
        if self.is_busy() {
            Err(WizardError::Busy)
        } else {
            Ok(())
        }
    }

    /// Welcome: start a simulated scan
    pub fn scan(&mut self) -> Result<RequestId, WizardError> {
        self.ensure_idle()?;
        self.state.ensure_can_scan()?;

        let scan_id = self.settings.scan_record_id.clone();
        Ok(self.dispatch(RequestKind::Scan, move |directory| {
            let by_id = scan_id
                .map(|id| directory.query(&VisitorQuery::Id(id)))
                .and_then(|found| found.into_iter().next());
            let record = by_id.or_else(|| directory.query(&VisitorQuery::All).into_iter().next());
            Outcome::Scanned(record)
        }))
    }

    /// Welcome: submit the typed query
    pub fn submit_search(&mut self) -> Result<RequestId, WizardError> {
        self.ensure_idle()?;
        let query = self.state.search_query()?;

        Ok(self.dispatch(RequestKind::Search, move |directory| {
            Outcome::SearchResults(directory.query(&query))
        }))
    }

    /// Confirm: check in the selected visitor
    pub fn check_in(&mut self) -> Result<RequestId, WizardError> {
        self.ensure_idle()?;
        let record = self.state.check_in_candidate()?.clone();

        Ok(self.dispatch(RequestKind::CheckIn, move |_| {
            Outcome::CheckedIn(CheckInReceipt::issue(&record))
        }))
    }

    /// Search: pick a result
    pub fn select_result(&mut self, index: usize) -> Result<(), WizardError> {
        self.ensure_idle()?;
        self.state.select_result(index)?;
        info!("Selected visitor {} for check-in", self.selected_id());
        Ok(())
    }

    pub fn select_highlighted(&mut self) -> Result<(), WizardError> {
        let index = self.state.highlighted;
        self.select_result(index)
    }

    /// Step back, abandoning any in-flight request
    pub fn go_back(&mut self) -> bool {
        self.cancel_in_flight();
        let from = self.state.step;
        let moved = self.state.go_back();
        if moved {
            info!("Wizard back: {:?} -> {:?}", from, self.state.step);
        }
        moved
    }

    /// Start over from Welcome, abandoning any in-flight request
    pub fn reset(&mut self) {
        self.cancel_in_flight();
        self.state.reset();
        info!("Wizard reset");
    }

    pub fn input_char(&mut self, c: char) {
        if !self.is_busy() {
            self.state.input_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_busy() {
            self.state.backspace();
        }
    }

    pub fn delete(&mut self) {
        if !self.is_busy() {
            self.state.delete();
        }
    }

    pub fn cursor_left(&mut self) {
        self.state.cursor_left();
    }

    pub fn cursor_right(&mut self) {
        self.state.cursor_right();
    }

    pub fn cursor_home(&mut self) {
        self.state.cursor_home();
    }

    pub fn cursor_end(&mut self) {
        self.state.cursor_end();
    }

    pub fn highlight_next(&mut self) {
        self.state.highlight_next();
    }

    pub fn highlight_previous(&mut self) {
        self.state.highlight_previous();
    }

    /// Apply every completion that has already arrived, without waiting.
    /// Stale completions are dropped and not reported.
    pub fn poll_completions(&mut self) -> Vec<Result<WizardStep, WizardError>> {
        let mut applied = Vec::new();
        while let Ok(completion) = self.completion_rx.try_recv() {
            if let Some(result) = self.apply_completion(completion) {
                applied.push(result);
            }
        }
        applied
    }

    /// Wait for the in-flight request to finish and apply it.
    /// Returns `None` when nothing is in flight.
    pub async fn settle(&mut self) -> Option<Result<WizardStep, WizardError>> {
        while self.in_flight.is_some() {
            let completion = self.completion_rx.recv().await?;
            if let Some(result) = self.apply_completion(completion) {
                return Some(result);
            }
        }
        None
    }

    /// Apply a completion if it belongs to the in-flight request
    pub fn apply_completion(
        &mut self,
        completion: Completion,
    ) -> Option<Result<WizardStep, WizardError>> {
        let current = self.in_flight.as_ref().map(|f| f.id);
        if current != Some(completion.request_id) {
            debug!(
                "Discarding stale completion for request {} (current: {:?})",
                completion.request_id, current
            );
            return None;
        }
        self.in_flight = None;

        let result = match completion.outcome {
            Outcome::Scanned(Some(record)) => {
                info!("Scan resolved to visitor {}", record.id);
                self.state.confirm_scanned(record);
                Ok(self.state.step)
            }
            Outcome::Scanned(None) => Err(WizardError::NoRecords),
            Outcome::SearchResults(results) => {
                info!("Search returned {} result(s)", results.len());
                self.state.show_results(results);
                Ok(self.state.step)
            }
            Outcome::CheckedIn(receipt) => {
                info!(
                    "Checked in visitor {} with badge {}",
                    receipt.visitor.id, receipt.badge_number
                );
                self.state.complete(receipt);
                Ok(self.state.step)
            }
        };
        Some(result)
    }

    fn dispatch<F>(&mut self, kind: RequestKind, work: F) -> RequestId
    where
        F: FnOnce(&dyn VisitorDirectory) -> Outcome + Send + 'static,
    {
        self.next_request_id += 1;
        let request_id = self.next_request_id;

        let directory = Arc::clone(&self.directory);
        let latency = self.settings.latency;
        let tx = self.completion_tx.clone();

        let handle = tokio::spawn(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            let outcome = work(directory.as_ref());
            // Receiver is gone only when the controller was dropped
            let _ = tx.send(Completion {
                request_id,
                outcome,
            });
        });

        debug!("Started {:?} request {}", kind, request_id);
        self.in_flight = Some(InFlight {
            id: request_id,
            kind,
            handle,
        });
        request_id
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.abort();
            debug!("Cancelled {:?} request {}", in_flight.kind, in_flight.id);
        }
    }

    fn selected_id(&self) -> &str {
        self.state.selected.as_ref().map_or("<none>", |r| r.id.as_str())
    }
}

impl Drop for WizardController {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

impl std::fmt::Debug for WizardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("state", &self.state)
            .field("settings", &self.settings)
            .field("pending_request", &self.pending_request())
            .finish_non_exhaustive()
    }
}
