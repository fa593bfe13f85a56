// ABOUTME: CLI search command - runs the kiosk's search step without a terminal UI
//
// Drives the same wizard the kiosk uses (with no simulated latency), so results
// match what a visitor would see on screen.

use std::time::Duration;

use anyhow::{anyhow, Result};

use super::util::{open_directory, output_visitors};
use super::{OutputFormat, SearchArgs};
use crate::config::KioskConfig;
use crate::models::VisitorRecord;
use crate::wizard::{WizardController, WizardSettings};

/// Execute the search command
pub async fn execute(args: SearchArgs, config: &KioskConfig, format: OutputFormat) -> Result<()> {
    let results = search(&args.query, config).await?;
    output_visitors(&results, format)
}

/// Run a search through the wizard and return the result list
pub async fn search(query: &str, config: &KioskConfig) -> Result<Vec<VisitorRecord>> {
    let settings = WizardSettings {
        latency: Duration::ZERO,
        ..config.wizard_settings()
    };
    let mut wizard = WizardController::new(open_directory(config)?, settings);

    for c in query.chars() {
        wizard.input_char(c);
    }
    wizard.submit_search()?;

    match wizard.settle().await {
        Some(Ok(_)) => Ok(wizard.state().results.clone()),
        Some(Err(e)) => Err(e.into()),
        None => Err(anyhow!("Search request was cancelled")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_uses_wizard_matching() {
        let results = search("techcorp", &KioskConfig::default()).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].full_name(), "John Smith");
    }

    #[tokio::test]
    async fn test_empty_search_is_an_error() {
        let err = search("   ", &KioskConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("Enter a name"));
    }
}
