// ABOUTME: CLI config command - print the effective kiosk configuration

use anyhow::Result;

use super::OutputFormat;
use crate::config::KioskConfig;

/// Execute the config command
pub fn execute(config: &KioskConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", config.to_toml()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}
