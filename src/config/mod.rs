// ABOUTME: Configuration management for the check-in kiosk
// Handles kiosk presentation, simulated latency, auto-reset and visitor data source

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::wizard::WizardSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KioskConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Kiosk behaviour and presentation
    #[serde(default)]
    pub kiosk: KioskSettings,

    /// Where visitor records come from
    #[serde(default)]
    pub directory: DirectorySettings,
}

/// Presentation density. Every variant shows the same steps; only spacing
/// and the amount of visit detail differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Standard,
    Spacious,
}

impl Density {
    /// Margin around step content
    pub const fn margin(self) -> u16 {
        match self {
            Self::Compact => 0,
            Self::Standard => 1,
            Self::Spacious => 2,
        }
    }

    /// Whether secondary visit details (department, duration, contact) are shown
    pub const fn shows_details(self) -> bool {
        !matches!(self, Self::Compact)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KioskSettings {
    /// Name shown in the kiosk header (e.g. "Main Lobby")
    #[serde(default = "default_kiosk_name")]
    pub name: String,

    #[serde(default)]
    pub density: Density,

    /// Artificial delay for scan, search and check-in (default: 800ms)
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,

    /// Return to Welcome this long after a check-in completes; 0 disables (default: 15)
    #[serde(default = "default_auto_reset_secs")]
    pub auto_reset_secs: u64,

    /// Visitor id a scan resolves to; the first visitor when unset
    #[serde(default)]
    pub scan_record_id: Option<String>,
}

impl Default for KioskSettings {
    fn default() -> Self {
        Self {
            name: default_kiosk_name(),
            density: Density::default(),
            simulated_latency_ms: default_latency_ms(),
            auto_reset_secs: default_auto_reset_secs(),
            scan_record_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySettings {
    /// JSON file with visitor records; demo visitors when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_kiosk_name() -> String {
    "Main Lobby".to_string()
}

const fn default_latency_ms() -> u64 {
    800
}

const fn default_auto_reset_secs() -> u64 {
    15
}

impl KioskConfig {
    /// Load configuration from default locations, then `explicit` if given.
    ///
    /// Later files override earlier ones only for values they set away from
    /// the built-in default, so a file cannot reset a lower layer's
    /// `density = "compact"` back to `"standard"`.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        for path in Self::get_config_paths() {
            if path.exists() {
                config.merge(Self::load_from(&path)?);
            }
        }

        if let Some(path) = explicit {
            config.merge(Self::load_from(path)?);
        }

        Ok(config)
    }

    /// Load a single configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Configuration file paths, lowest precedence first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/vms-kiosk/config.toml")];

        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".vms-kiosk").join("config.toml"));
        }

        paths
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".vms-kiosk").join("config"))
    }

    /// Merge another config into this one. Values left at their defaults in
    /// `other` do not override.
    fn merge(&mut self, other: Self) {
        let defaults = KioskSettings::default();

        if other.kiosk.name != defaults.name {
            self.kiosk.name = other.kiosk.name;
        }
        if other.kiosk.density != defaults.density {
            self.kiosk.density = other.kiosk.density;
        }
        if other.kiosk.simulated_latency_ms != defaults.simulated_latency_ms {
            self.kiosk.simulated_latency_ms = other.kiosk.simulated_latency_ms;
        }
        if other.kiosk.auto_reset_secs != defaults.auto_reset_secs {
            self.kiosk.auto_reset_secs = other.kiosk.auto_reset_secs;
        }
        if other.kiosk.scan_record_id.is_some() {
            self.kiosk.scan_record_id = other.kiosk.scan_record_id;
        }
        if other.directory.data_file.is_some() {
            self.directory.data_file = other.directory.data_file;
        }
    }

    /// Settings for the wizard controller
    pub fn wizard_settings(&self) -> WizardSettings {
        WizardSettings {
            latency: Duration::from_millis(self.kiosk.simulated_latency_ms),
            scan_record_id: self.kiosk.scan_record_id.clone(),
        }
    }

    /// Delay before a completed check-in returns to Welcome
    pub const fn auto_reset(&self) -> Option<Duration> {
        match self.kiosk.auto_reset_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            kiosk: KioskSettings::default(),
            directory: DirectorySettings::default(),
        }
    }
}
