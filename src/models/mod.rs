// ABOUTME: Core data models for kiosk visitors, visits and check-in receipts

pub mod visitor;

pub use visitor::{CheckInReceipt, VisitDetails, VisitStatus, VisitorRecord, format_duration};
