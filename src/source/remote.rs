//! Remote transactions endpoint
//!
//! A single HTTP GET returning a JSON array of records. One attempt per
//! fetch: no retry, no pagination, no authentication.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, trace};

use super::{decode_records, SpendingSource};
use crate::error::{TrackerError, TrackerResult};
use crate::models::SpendingRecord;

/// Fetches records from the transactions service
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: Client,
    url: String,
}

impl RemoteSource {
    /// Create a source for `url` with a default HTTP client
    pub fn new(url: impl Into<String>) -> TrackerResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| TrackerError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, url))
    }

    /// Create a source that uses an existing client
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SpendingSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch(&self) -> TrackerResult<Vec<SpendingRecord>> {
        debug!(url = %self.url, "requesting spending records");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::Fetch(format!(
                "{} answered with status {}",
                self.url, status
            )));
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "received response body");
        trace!(body = %String::from_utf8_lossy(&body), "raw response");

        decode_records(&body)
    }
}
