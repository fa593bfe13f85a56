// ABOUTME: Built-in demo visitors used when no visitor data file is configured

use crate::models::{VisitDetails, VisitStatus, VisitorRecord};
use chrono::{Local, NaiveDateTime, NaiveTime};

struct Seed {
    id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    company: Option<&'static str>,
    host_name: &'static str,
    department: &'static str,
    purpose: &'static str,
    at: (u32, u32),
    minutes: u32,
    location: Option<&'static str>,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "VIS-1001",
        first_name: "John",
        last_name: "Smith",
        email: "john.smith@techcorp.com",
        phone: "+1 (555) 123-4567",
        company: Some("TechCorp"),
        host_name: "Sarah Johnson",
        department: "Engineering",
        purpose: "Architecture review",
        at: (9, 30),
        minutes: 60,
        location: Some("Conference Room A"),
    },
    Seed {
        id: "VIS-1002",
        first_name: "Jane",
        last_name: "Doe",
        email: "jane.doe@acme.io",
        phone: "+1 (555) 234-5678",
        company: Some("Acme"),
        host_name: "Michael Chen",
        department: "Sales",
        purpose: "Contract negotiation",
        at: (10, 0),
        minutes: 90,
        location: Some("Boardroom"),
    },
    Seed {
        id: "VIS-1003",
        first_name: "Robert",
        last_name: "Williams",
        email: "r.williams@globex.com",
        phone: "+1 (555) 345-6789",
        company: Some("Globex"),
        host_name: "Emily Davis",
        department: "Human Resources",
        purpose: "Interview",
        at: (11, 15),
        minutes: 45,
        location: None,
    },
    Seed {
        id: "VIS-1004",
        first_name: "Maria",
        last_name: "Garcia",
        email: "maria.garcia@gmail.com",
        phone: "+1 (555) 456-7890",
        company: None,
        host_name: "David Wilson",
        department: "Facilities",
        purpose: "Maintenance inspection",
        at: (13, 0),
        minutes: 120,
        location: Some("Building B, Floor 2"),
    },
    Seed {
        id: "VIS-1005",
        first_name: "Ahmed",
        last_name: "Hassan",
        email: "ahmed.hassan@initech.com",
        phone: "+1 (555) 567-8901",
        company: Some("Initech"),
        host_name: "Sarah Johnson",
        department: "Engineering",
        purpose: "Vendor demo",
        at: (14, 30),
        minutes: 30,
        location: Some("Demo Lab"),
    },
    Seed {
        id: "VIS-1006",
        first_name: "Lisa",
        last_name: "Johnston",
        email: "lisa.j@umbrella.org",
        phone: "+1 (555) 678-9012",
        company: Some("Umbrella Foundation"),
        host_name: "James Brown",
        department: "Finance",
        purpose: "Quarterly audit",
        at: (15, 45),
        minutes: 180,
        location: Some("Finance Suite"),
    },
];

fn today_at(hour: u32, minute: u32) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
    Local::now().date_naive().and_time(time)
}

/// Demo visitors, all expected today
pub fn seed_visitors() -> Vec<VisitorRecord> {
    SEEDS
        .iter()
        .map(|seed| VisitorRecord {
            id: seed.id.to_string(),
            first_name: seed.first_name.to_string(),
            last_name: seed.last_name.to_string(),
            email: seed.email.to_string(),
            phone: seed.phone.to_string(),
            company: seed.company.map(str::to_string),
            visit: VisitDetails {
                host_name: seed.host_name.to_string(),
                department: seed.department.to_string(),
                purpose: seed.purpose.to_string(),
                scheduled_time: today_at(seed.at.0, seed.at.1),
                estimated_duration_minutes: seed.minutes,
                meeting_location: seed.location.map(str::to_string),
            },
            status: VisitStatus::Expected,
        })
        .collect()
}
