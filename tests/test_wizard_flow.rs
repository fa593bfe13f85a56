// ABOUTME: Behavioural tests for the check-in wizard driven through its public controller API

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use vms_kiosk::directory::{InMemoryDirectory, VisitorDirectory, VisitorQuery};
use vms_kiosk::models::{VisitDetails, VisitStatus, VisitorRecord};
use vms_kiosk::wizard::{WizardController, WizardError, WizardSettings, WizardState, WizardStep};

fn visitor(id: &str, first: &str, last: &str, company: &str) -> VisitorRecord {
    VisitorRecord {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@{}.com", first, last, company).to_lowercase(),
        phone: "+1 555 0100".to_string(),
        company: Some(company.to_string()),
        visit: VisitDetails {
            host_name: "Sarah Johnson".to_string(),
            department: "Engineering".to_string(),
            purpose: "Meeting".to_string(),
            scheduled_time: NaiveDate::from_ymd_opt(2024, 5, 2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            estimated_duration_minutes: 60,
            meeting_location: None,
        },
        status: VisitStatus::Expected,
    }
}

fn john() -> VisitorRecord {
    visitor("V1", "John", "Smith", "TechCorp")
}

fn jane() -> VisitorRecord {
    visitor("V2", "Jane", "Doe", "Acme")
}

fn setup(records: Vec<VisitorRecord>) -> (WizardController, Arc<InMemoryDirectory>) {
    let directory = Arc::new(InMemoryDirectory::new(records));
    let settings = WizardSettings {
        latency: Duration::ZERO,
        scan_record_id: None,
    };
    (WizardController::new(directory.clone(), settings), directory)
}

fn type_query(wizard: &mut WizardController, text: &str) {
    for c in text.chars() {
        wizard.input_char(c);
    }
}

async fn search(wizard: &mut WizardController, text: &str) {
    type_query(wizard, text);
    wizard.submit_search().unwrap();
    assert_eq!(wizard.settle().await, Some(Ok(WizardStep::Search)));
}

#[tokio::test]
async fn test_search_matches_name_case_insensitively() {
    let (mut wizard, directory) = setup(vec![john(), jane()]);

    search(&mut wizard, "john").await;

    assert_eq!(wizard.step(), WizardStep::Search);
    assert_eq!(wizard.state().results, vec![john()]);
    assert_eq!(
        wizard.state().results,
        directory.query(&VisitorQuery::text("john"))
    );
}

#[tokio::test]
async fn test_search_matches_company_and_email() {
    let (mut wizard, _) = setup(vec![john(), jane()]);
    search(&mut wizard, "ACME").await;
    assert_eq!(wizard.state().results, vec![jane()]);

    wizard.go_back();
    search(&mut wizard, "smith@tech").await;
    assert_eq!(wizard.state().results, vec![john()]);
}

#[tokio::test]
async fn test_search_without_matches_is_empty_search_step() {
    let (mut wizard, _) = setup(vec![john(), jane()]);
    search(&mut wizard, "nobody").await;

    assert_eq!(wizard.step(), WizardStep::Search);
    assert!(wizard.state().results.is_empty());
    assert!(wizard.select_result(0).is_err());
    assert_eq!(wizard.step(), WizardStep::Search);
}

#[tokio::test]
async fn test_empty_query_is_a_no_op() {
    let (mut wizard, _) = setup(vec![john(), jane()]);

    assert_eq!(wizard.submit_search(), Err(WizardError::EmptyQuery));
    type_query(&mut wizard, "   ");
    assert_eq!(wizard.submit_search(), Err(WizardError::EmptyQuery));

    assert_eq!(wizard.step(), WizardStep::Welcome);
    assert!(!wizard.is_busy());
}

#[tokio::test]
async fn test_select_second_result_moves_to_confirm() {
    let (mut wizard, _) = setup(vec![john(), jane()]);
    search(&mut wizard, "@").await;
    assert_eq!(wizard.state().results, vec![john(), jane()]);

    wizard.select_result(1).unwrap();

    assert_eq!(wizard.step(), WizardStep::Confirm);
    assert_eq!(wizard.state().selected, Some(jane()));
}

#[tokio::test]
async fn test_check_in_completes_without_touching_directory() {
    let (mut wizard, directory) = setup(vec![john(), jane()]);
    let before = directory.query(&VisitorQuery::All);

    search(&mut wizard, "jane").await;
    wizard.select_highlighted().unwrap();
    wizard.check_in().unwrap();
    assert_eq!(wizard.settle().await, Some(Ok(WizardStep::Complete)));

    let receipt = wizard.state().receipt.clone().unwrap();
    assert_eq!(receipt.visitor.id, "V2");
    assert_eq!(receipt.visitor.status, VisitStatus::CheckedIn);
    assert_eq!(directory.query(&VisitorQuery::All), before);
}

#[tokio::test]
async fn test_reset_from_complete_clears_everything() {
    let (mut wizard, _) = setup(vec![john(), jane()]);

    search(&mut wizard, "john").await;
    wizard.select_result(0).unwrap();
    wizard.check_in().unwrap();
    wizard.settle().await;
    assert_eq!(wizard.step(), WizardStep::Complete);

    wizard.reset();

    assert_eq!(wizard.state(), &WizardState::new());
}

#[tokio::test]
async fn test_back_from_welcome_twice_is_a_no_op() {
    let (mut wizard, _) = setup(vec![john(), jane()]);
    type_query(&mut wizard, "jo");
    let before = wizard.state().clone();

    assert!(!wizard.go_back());
    assert!(!wizard.go_back());

    assert_eq!(wizard.state(), &before);
}

#[tokio::test]
async fn test_scan_then_back_returns_to_welcome() {
    let (mut wizard, _) = setup(vec![john(), jane()]);

    wizard.scan().unwrap();
    assert_eq!(wizard.settle().await, Some(Ok(WizardStep::Confirm)));
    assert_eq!(wizard.state().selected, Some(john()));

    assert!(wizard.go_back());
    assert_eq!(wizard.step(), WizardStep::Welcome);
    assert!(wizard.state().selected.is_none());
}

#[tokio::test]
async fn test_confirm_back_returns_to_search_results() {
    let (mut wizard, _) = setup(vec![john(), jane()]);
    search(&mut wizard, "o").await;
    wizard.select_result(1).unwrap();

    assert!(wizard.go_back());

    assert_eq!(wizard.step(), WizardStep::Search);
    assert_eq!(wizard.state().results.len(), 2);
    assert!(wizard.state().selected.is_none());
}

#[tokio::test]
async fn test_late_result_after_reset_and_new_search_is_ignored() {
    let directory = Arc::new(InMemoryDirectory::new(vec![john(), jane()]));
    let slow = WizardSettings {
        latency: Duration::from_millis(30),
        scan_record_id: None,
    };
    let mut wizard = WizardController::new(directory, slow);

    type_query(&mut wizard, "john");
    wizard.submit_search().unwrap();
    wizard.reset();

    // The abandoned request would have produced John; only the new one may apply
    type_query(&mut wizard, "jane");
    wizard.submit_search().unwrap();
    assert_eq!(wizard.settle().await, Some(Ok(WizardStep::Search)));
    assert_eq!(wizard.state().results, vec![jane()]);

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(wizard.poll_completions().is_empty());
    assert_eq!(wizard.state().results, vec![jane()]);
}

#[tokio::test]
async fn test_back_during_check_in_cancels_it() {
    let directory = Arc::new(InMemoryDirectory::new(vec![john(), jane()]));
    let slow = WizardSettings {
        latency: Duration::from_millis(30),
        scan_record_id: None,
    };
    let mut wizard = WizardController::new(directory, slow);

    type_query(&mut wizard, "doe");
    wizard.submit_search().unwrap();
    wizard.settle().await;
    wizard.select_result(0).unwrap();

    wizard.check_in().unwrap();
    assert_eq!(wizard.check_in(), Err(WizardError::Busy));
    assert!(wizard.go_back());

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(wizard.poll_completions().is_empty());
    assert_eq!(wizard.step(), WizardStep::Search);
    assert!(wizard.state().receipt.is_none());
}
