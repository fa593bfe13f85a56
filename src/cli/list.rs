// ABOUTME: CLI list command - list visitors in schedule order

use anyhow::Result;

use super::util::{open_directory, output_visitors};
use super::{ListArgs, OutputFormat};
use crate::config::KioskConfig;
use crate::directory::{VisitorDirectory, VisitorQuery};
use crate::models::VisitorRecord;

/// Execute the list command
#[allow(clippy::unused_async)] // Async for consistency with other CLI commands
pub async fn execute(args: ListArgs, config: &KioskConfig, format: OutputFormat) -> Result<()> {
    let directory = open_directory(config)?;
    let visitors = list_visitors(directory.as_ref(), &args);
    output_visitors(&visitors, format)
}

/// All visitors, filtered by host and sorted by scheduled time
pub fn list_visitors(directory: &dyn VisitorDirectory, args: &ListArgs) -> Vec<VisitorRecord> {
    let host_filter = args.host.as_deref().map(str::to_lowercase);

    let mut visitors: Vec<VisitorRecord> = directory
        .query(&VisitorQuery::All)
        .into_iter()
        .filter(|v| {
            host_filter
                .as_ref()
                .map_or(true, |h| v.visit.host_name.to_lowercase().contains(h))
        })
        .collect();

    visitors.sort_by_key(|v| v.visit.scheduled_time);
    visitors
}
