// ABOUTME: Shared CLI utilities for loading the directory and printing visitor tables

use std::sync::Arc;

use anyhow::{Context, Result};

use super::OutputFormat;
use crate::config::KioskConfig;
use crate::directory::InMemoryDirectory;
use crate::models::VisitorRecord;

/// Open the visitor directory named by the configuration
pub fn open_directory(config: &KioskConfig) -> Result<Arc<InMemoryDirectory>> {
    let directory = InMemoryDirectory::load(config.directory.data_file.as_deref())
        .context("Failed to open visitor directory")?;
    Ok(Arc::new(directory))
}

/// Print visitors in the requested format
pub fn output_visitors(records: &[VisitorRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(records)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            for line in visitor_table(records) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Render visitors as text table lines
pub fn visitor_table(records: &[VisitorRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No visitors found.".to_string()];
    }

    let mut lines = vec![
        format!(
            "{:<10} {:<22} {:<20} {:<6} {:<18} STATUS",
            "ID", "VISITOR", "COMPANY", "TIME", "HOST"
        ),
        "-".repeat(92),
    ];

    lines.extend(records.iter().map(|r| {
        format!(
            "{:<10} {:<22} {:<20} {:<6} {:<18} {} {}",
            truncate(&r.id, 10),
            truncate(&r.full_name(), 22),
            truncate(r.company_label(), 20),
            r.visit.scheduled_clock(),
            truncate(&r.visit.host_name, 18),
            r.status.indicator(),
            r.status.label()
        )
    }));

    lines
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
pub fn truncate(s: &str, max_len: usize) -> String {
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
