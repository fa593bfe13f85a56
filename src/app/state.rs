// ABOUTME: Application state for the kiosk TUI - wizard, config, notifications and check-in log

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::KioskConfig;
use crate::directory::{InMemoryDirectory, VisitorDirectory};
use crate::models::CheckInReceipt;
use crate::wizard::{WizardController, WizardError, WizardStep};

const NOTIFICATION_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.duration
    }
}

#[derive(Debug)]
pub struct AppState {
    pub wizard: WizardController,
    pub config: KioskConfig,
    pub should_quit: bool,
    pub help_visible: bool,
    /// Latest message shown in the footer
    pub notification: Option<Notification>,
    /// Check-ins completed during this kiosk session
    pub check_in_log: Vec<CheckInReceipt>,
    /// When the wizard last reached Complete, for auto-reset
    pub completed_at: Option<Instant>,
}

impl AppState {
    pub fn new(config: KioskConfig, directory: Arc<dyn VisitorDirectory>) -> Self {
        let wizard = WizardController::new(directory, config.wizard_settings());
        Self {
            wizard,
            config,
            should_quit: false,
            help_visible: false,
            notification: None,
            check_in_log: Vec::new(),
            completed_at: None,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, notification_type: NotificationType) {
        self.notification = Some(Notification {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: NOTIFICATION_DURATION,
        });
    }

    pub fn cleanup_expired_notifications(&mut self) {
        let now = Instant::now();
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
        }
    }

    /// Surface a refused wizard action to the visitor. State is unchanged.
    pub fn report_rejection(&mut self, error: &WizardError) {
        debug!("Wizard action refused: {}", error);
        if *error != WizardError::Busy {
            self.notify(error.to_string(), NotificationType::Warning);
        }
    }

    /// Record the outcome of a finished wizard request
    pub fn on_wizard_result(&mut self, result: Result<WizardStep, WizardError>) {
        match result {
            Ok(WizardStep::Complete) => {
                if let Some(receipt) = self.wizard.state().receipt.clone() {
                    info!(
                        "Check-in #{} complete for {}",
                        self.check_in_log.len() + 1,
                        receipt.visitor.full_name()
                    );
                    self.notify(
                        format!("Welcome, {}!", receipt.visitor.first_name),
                        NotificationType::Success,
                    );
                    self.check_in_log.push(receipt);
                }
                self.completed_at = Some(Instant::now());
            }
            Ok(WizardStep::Search) if self.wizard.state().results.is_empty() => {
                self.notify("No visits found", NotificationType::Info);
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Wizard request failed: {}", e);
                self.notify(e.to_string(), NotificationType::Warning);
            }
        }
    }

    /// Back to Welcome for the next visitor
    pub fn start_new_check_in(&mut self) {
        self.wizard.reset();
        self.completed_at = None;
    }

    pub fn auto_reset_due(&self, now: Instant) -> bool {
        match (self.config.auto_reset(), self.completed_at) {
            (Some(after), Some(at)) => {
                self.wizard.step() == WizardStep::Complete && now.duration_since(at) >= after
            }
            _ => false,
        }
    }

    pub fn checked_in_count(&self) -> usize {
        self.check_in_log.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(KioskConfig::default(), Arc::new(InMemoryDirectory::mock()))
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: KioskConfig, directory: Arc<dyn VisitorDirectory>) -> Self {
        Self {
            state: AppState::new(config, directory),
        }
    }

    /// Periodic update: apply finished requests, expire notifications and
    /// auto-reset after a completed check-in
    pub fn tick(&mut self) {
        for result in self.state.wizard.poll_completions() {
            self.state.on_wizard_result(result);
        }

        self.state.cleanup_expired_notifications();

        if self.state.auto_reset_due(Instant::now()) {
            info!("Auto-reset after completed check-in");
            self.state.start_new_check_in();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::default();
        assert_eq!(state.wizard.step(), WizardStep::Welcome);
        assert!(!state.should_quit);
        assert!(!state.help_visible);
        assert_eq!(state.checked_in_count(), 0);
    }

    #[test]
    fn test_busy_rejection_is_silent() {
        let mut state = AppState::default();
        state.report_rejection(&WizardError::Busy);
        assert!(state.notification.is_none());

        state.report_rejection(&WizardError::EmptyQuery);
        assert_eq!(
            state.notification.as_ref().map(|n| n.notification_type),
            Some(NotificationType::Warning)
        );
    }

    #[test]
    fn test_notification_expiry() {
        let created_at = Instant::now();
        let notification = Notification {
            message: "hi".to_string(),
            notification_type: NotificationType::Info,
            created_at,
            duration: Duration::from_secs(1),
        };
        assert!(!notification.is_expired(created_at));
        assert!(notification.is_expired(created_at + Duration::from_secs(2)));
    }

    #[test]
    fn test_auto_reset_requires_complete_step() {
        let mut state = AppState::default();
        state.completed_at = Some(Instant::now());
        // Still on Welcome, so there is nothing to reset
        assert!(!state.auto_reset_due(Instant::now() + Duration::from_secs(60)));
    }
}
