// ABOUTME: CLI argument parsing and command routing for vms-kiosk
//
// Provides command-line interface for:
// - Launching the check-in kiosk (tui, default)
// - Looking up visits the way the kiosk does (search)
// - Listing today's expected visitors (list)
// - Showing the effective configuration (config)

pub mod config;
pub mod list;
pub mod search;
pub mod util;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{Density, KioskConfig};

/// Visitor check-in kiosk
#[derive(Parser)]
#[command(name = "vms-kiosk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Config file applied on top of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON file with visitor records (overrides config)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the kiosk (default if no command given)
    Tui(TuiArgs),

    /// Search visitors by name, company, email or phone
    Search(SearchArgs),

    /// List all visitors
    List(ListArgs),

    /// Print the effective configuration
    Config,
}

/// Arguments for the tui command
#[derive(clap::Args, Default)]
pub struct TuiArgs {
    /// Presentation density
    #[arg(long, value_enum)]
    pub density: Option<Density>,

    /// Simulated request latency in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Seconds before a finished check-in resets (0 disables)
    #[arg(long)]
    pub auto_reset_secs: Option<u64>,
}

/// Arguments for the search command
#[derive(clap::Args)]
pub struct SearchArgs {
    /// Text to look for
    pub query: String,
}

/// Arguments for the list command
#[derive(clap::Args)]
pub struct ListArgs {
    /// Only visitors whose host name contains this text
    #[arg(long)]
    pub host: Option<String>,
}

impl Cli {
    /// Load configuration and apply global command-line overrides
    pub fn resolve_config(&self) -> Result<KioskConfig> {
        let mut config = KioskConfig::load(self.config.as_deref())?;
        if let Some(ref data) = self.data {
            config.directory.data_file = Some(data.clone());
        }
        Ok(config)
    }
}

impl TuiArgs {
    /// Apply kiosk overrides from the command line
    pub fn apply(&self, config: &mut KioskConfig) {
        if let Some(density) = self.density {
            config.kiosk.density = density;
        }
        if let Some(latency_ms) = self.latency_ms {
            config.kiosk.simulated_latency_ms = latency_ms;
        }
        if let Some(secs) = self.auto_reset_secs {
            config.kiosk.auto_reset_secs = secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = Cli::try_parse_from(["vms-kiosk"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_search_with_json_format() {
        let cli = Cli::try_parse_from(["vms-kiosk", "search", "john", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Commands::Search(args)) => assert_eq!(args.query, "john"),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_tui_overrides_apply() {
        let cli = Cli::try_parse_from([
            "vms-kiosk",
            "tui",
            "--density",
            "compact",
            "--latency-ms",
            "0",
        ])
        .unwrap();

        let Some(Commands::Tui(args)) = cli.command else {
            panic!("expected tui command");
        };
        let mut config = KioskConfig::default();
        args.apply(&mut config);

        assert_eq!(config.kiosk.density, Density::Compact);
        assert_eq!(config.kiosk.simulated_latency_ms, 0);
        assert_eq!(config.kiosk.auto_reset_secs, 15);
    }
}
