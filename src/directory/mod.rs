// ABOUTME: Visitor directory - the read-only record source the kiosk queries
// The wizard only sees the VisitorDirectory trait so the mock set can be swapped
// for a real data source without touching the state machine.

pub mod mock_data;

use crate::models::VisitorRecord;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to read visitor data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse visitor data from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What to ask the directory for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitorQuery {
    /// Every record, in directory order
    All,
    /// Case-insensitive substring match over name, company, email and phone
    Text(String),
    /// Exact identifier lookup
    Id(String),
}

impl VisitorQuery {
    /// Build a text query, trimming and lower-casing the input
    pub fn text(input: &str) -> Self {
        Self::Text(input.trim().to_lowercase())
    }
}

/// Read-only source of visitor records
#[cfg_attr(test, mockall::automock)]
pub trait VisitorDirectory: Send + Sync {
    fn query(&self, query: &VisitorQuery) -> Vec<VisitorRecord>;
}

/// Directory backed by an immutable in-memory record set
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    records: Arc<[VisitorRecord]>,
}

impl InMemoryDirectory {
    pub fn new(records: Vec<VisitorRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Directory seeded with the built-in demo visitors
    pub fn mock() -> Self {
        Self::new(mock_data::seed_visitors())
    }

    /// Load a JSON array of visitor records
    pub fn from_json_file(path: &Path) -> Result<Self, DirectoryError> {
        let content = fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<VisitorRecord> =
            serde_json::from_str(&content).map_err(|source| DirectoryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Loaded {} visitor records from {}", records.len(), path.display());
        Ok(Self::new(records))
    }

    /// Use `data_file` when given, otherwise the built-in demo visitors
    pub fn load(data_file: Option<&Path>) -> Result<Self, DirectoryError> {
        match data_file {
            Some(path) => Self::from_json_file(path),
            None => {
                debug!("No visitor data file configured - using demo visitors");
                Ok(Self::mock())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl VisitorDirectory for InMemoryDirectory {
    fn query(&self, query: &VisitorQuery) -> Vec<VisitorRecord> {
        match query {
            VisitorQuery::All => self.records.to_vec(),
            VisitorQuery::Text(needle) => self
                .records
                .iter()
                .filter(|r| r.matches(needle))
                .cloned()
                .collect(),
            VisitorQuery::Id(id) => self
                .records
                .iter()
                .filter(|r| &r.id == id)
                .cloned()
                .collect(),
        }
    }
}
