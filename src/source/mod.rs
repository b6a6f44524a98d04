//! Data sources for spending records
//!
//! Every source sits behind the same single-shot [`SpendingSource::fetch`]:
//! it either produces the full list of records or fails. Sources do not
//! retry and keep no state between calls.

pub mod file;
pub mod fixture;
pub mod remote;

use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::SpendingRecord;

pub use file::FileSource;
pub use fixture::FixtureSource;
pub use remote::RemoteSource;

/// Something that produces spending records
#[async_trait]
pub trait SpendingSource: Send + Sync {
    /// Short name for logs and status lines
    fn name(&self) -> &str;

    /// Fetch the complete record list once
    async fn fetch(&self) -> TrackerResult<Vec<SpendingRecord>>;
}

/// Which kind of source to read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in sample records
    #[default]
    Fixture,
    /// HTTP GET against the configured endpoint
    Remote,
    /// A local JSON file in the endpoint's format
    File,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixture => write!(f, "fixture"),
            Self::Remote => write!(f, "remote"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Build the source selected in `settings`
pub fn build_source(settings: &Settings) -> TrackerResult<Box<dyn SpendingSource>> {
    match settings.source {
        SourceKind::Fixture => Ok(Box::new(FixtureSource::sample()?)),
        SourceKind::Remote => Ok(Box::new(RemoteSource::new(settings.endpoint.clone())?)),
        SourceKind::File => {
            let path = settings.records_file.clone().ok_or_else(|| {
                TrackerError::Config("the file source needs a records file path".into())
            })?;
            Ok(Box::new(FileSource::new(path)))
        }
    }
}

/// Decode a JSON array of records in the endpoint's wire format
pub fn decode_records(bytes: &[u8]) -> TrackerResult<Vec<SpendingRecord>> {
    serde_json::from_slice(bytes).map_err(|e| TrackerError::Decode(e.to_string()))
}
