// ABOUTME: Check-in wizard module - the kiosk's four-step flow
// Welcome -> Search -> Confirm -> Complete, with scan jumping straight to Confirm

pub mod controller;
pub mod state;

pub use controller::{Completion, Outcome, RequestId, RequestKind, WizardController, WizardSettings};
pub use state::{WizardError, WizardState, WizardStep};
