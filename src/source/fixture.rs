//! Static fixture source
//!
//! Serves an in-memory list of records. Used when no remote endpoint is
//! wired up, and in tests.

use async_trait::async_trait;

use super::{decode_records, SpendingSource};
use crate::error::TrackerResult;
use crate::models::SpendingRecord;

const SAMPLE_RECORDS: &str = r#"[
    {"id": "1", "amount": 20.0, "date": "2025-08-24T00:00:00", "category": "Food", "description": "Lunch"},
    {"id": "2", "amount": 50.0, "date": "2025-08-23T00:00:00", "category": "Transport", "description": "Taxi"},
    {"id": "3", "amount": 100.0, "date": "2025-08-22T00:00:00", "category": "Shopping", "description": "Clothes"}
]"#;

/// A source that always returns the same records
#[derive(Debug, Clone)]
pub struct FixtureSource {
    records: Vec<SpendingRecord>,
}

impl FixtureSource {
    /// The built-in sample: one lunch, one taxi ride, one clothes purchase
    pub fn sample() -> TrackerResult<Self> {
        Ok(Self::with_records(decode_records(SAMPLE_RECORDS.as_bytes())?))
    }

    pub fn with_records(records: Vec<SpendingRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl SpendingSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch(&self) -> TrackerResult<Vec<SpendingRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Allocation, Money};
    use crate::services::aggregate;

    #[tokio::test]
    async fn test_sample_records() {
        let records = FixtureSource::sample().unwrap().fetch().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].description(), "Lunch");
        assert_eq!(records[2].amount(), Money::from_cents(10000));
    }

    #[tokio::test]
    async fn test_sample_covers_every_allocation() {
        let records = FixtureSource::sample().unwrap().fetch().await.unwrap();
        let summaries = aggregate(&records, &Allocation::defaults());
        assert!(summaries.iter().all(|s| s.records().len() == 1));
    }

    #[tokio::test]
    async fn test_custom_records() {
        let source = FixtureSource::with_records(Vec::new());
        assert!(source.fetch().await.unwrap().is_empty());
    }
}
