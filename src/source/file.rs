//! Local file source
//!
//! Reads a JSON file in the same format the transactions endpoint serves.
//! Handy for working offline with a saved response.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{decode_records, SpendingSource};
use crate::error::{TrackerError, TrackerResult};
use crate::models::SpendingRecord;

/// Reads records from a JSON file on every fetch
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SpendingSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> TrackerResult<Vec<SpendingRecord>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            TrackerError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        decode_records(&bytes)
    }
}
