// ABOUTME: Visitor record data model with visit details and display helpers

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisitStatus {
    #[default]
    Expected,
    CheckedIn,
}

impl VisitStatus {
    pub const fn indicator(&self) -> &'static str {
        match self {
            Self::Expected => "○",
            Self::CheckedIn => "●",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Expected => "Expected",
            Self::CheckedIn => "Checked in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitDetails {
    pub host_name: String,
    pub department: String,
    pub purpose: String,
    pub scheduled_time: NaiveDateTime,
    pub estimated_duration_minutes: u32,
    #[serde(default)]
    pub meeting_location: Option<String>,
}

impl VisitDetails {
    /// Scheduled start as "HH:MM"
    pub fn scheduled_clock(&self) -> String {
        self.scheduled_time.format("%H:%M").to_string()
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.estimated_duration_minutes)
    }

    pub fn location_label(&self) -> &str {
        self.meeting_location.as_deref().unwrap_or("Reception")
    }
}

/// A visitor as supplied by the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    pub visit: VisitDetails,
    #[serde(default)]
    pub status: VisitStatus,
}

impl VisitorRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn company_label(&self) -> &str {
        self.company.as_deref().unwrap_or("Independent")
    }

    /// Case-insensitive substring match over name, company, email and phone.
    /// `needle` must already be trimmed and lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }

        let haystacks = [
            Some(self.full_name()),
            Some(self.first_name.clone()),
            Some(self.last_name.clone()),
            self.company.clone(),
            Some(self.email.clone()),
            Some(self.phone.clone()),
        ];

        haystacks
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Result of a completed check-in. Holds its own copy of the visitor so the
/// directory's records are never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckInReceipt {
    pub visitor: VisitorRecord,
    pub badge_number: String,
    pub checked_in_at: DateTime<Utc>,
}

impl CheckInReceipt {
    pub fn issue(record: &VisitorRecord) -> Self {
        let mut visitor = record.clone();
        visitor.status = VisitStatus::CheckedIn;

        Self {
            visitor,
            badge_number: badge_number(Uuid::new_v4()),
            checked_in_at: Utc::now(),
        }
    }
}

/// First eight hex digits of a uuid, upper-cased
fn badge_number(id: Uuid) -> String {
    id.simple().to_string()[..8].to_uppercase()
}

/// Format a duration in minutes as "45 min", "2h" or "1h 30m"
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(first: &str, last: &str, company: Option<&str>) -> VisitorRecord {
        VisitorRecord {
            id: "v-1".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: "+1 555 0100".to_string(),
            company: company.map(str::to_string),
            visit: VisitDetails {
                host_name: "Sarah Johnson".to_string(),
                department: "Engineering".to_string(),
                purpose: "Interview".to_string(),
                scheduled_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                    .unwrap()
                    .and_hms_opt(9, 30, 0)
                    .unwrap(),
                estimated_duration_minutes: 90,
                meeting_location: None,
            },
            status: VisitStatus::Expected,
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45 min");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(0), "0 min");
    }

    #[test]
    fn test_matches_full_name_across_space() {
        let r = record("John", "Smith", Some("TechCorp"));
        assert!(r.matches("john smith"));
        assert!(r.matches("techcorp"));
        assert!(r.matches("555 0100"));
        assert!(!r.matches("acme"));
    }

    #[test]
    fn test_matches_rejects_empty_needle() {
        let r = record("John", "Smith", None);
        assert!(!r.matches(""));
    }

    #[test]
    fn test_missing_company_and_location_labels() {
        let r = record("Ana", "Lopez", None);
        assert_eq!(r.company_label(), "Independent");
        assert_eq!(r.visit.location_label(), "Reception");
        assert_eq!(r.visit.scheduled_clock(), "09:30");
    }

    #[test]
    fn test_receipt_copies_record() {
        let r = record("John", "Smith", Some("TechCorp"));
        let receipt = CheckInReceipt::issue(&r);

        assert_eq!(receipt.visitor.status, VisitStatus::CheckedIn);
        assert_eq!(r.status, VisitStatus::Expected);
        assert_eq!(receipt.badge_number.len(), 8);
        assert!(receipt.badge_number.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_record_json_is_camel_case() {
        let r = record("John", "Smith", Some("TechCorp"));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["visit"]["hostName"], "Sarah Johnson");
        assert_eq!(json["status"], "expected");
    }
}
