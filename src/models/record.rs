//! Spending record model
//!
//! A spending record is a single outflow as reported by a data source. Records
//! are immutable once decoded: fields are private and only exposed through
//! accessors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecordId;
use super::money::Money;

/// Timestamp layout used by the transactions service
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single spending entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireRecord", into = "WireRecord")]
pub struct SpendingRecord {
    id: RecordId,
    amount: Money,
    date: NaiveDateTime,
    category: String,
    description: String,
}

impl SpendingRecord {
    /// Create a new record
    ///
    /// Fails if the amount is negative.
    pub fn new(
        id: impl Into<RecordId>,
        amount: Money,
        date: NaiveDateTime,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, RecordValidationError> {
        if amount.is_negative() {
            return Err(RecordValidationError::NegativeAmount(amount));
        }
        Ok(Self {
            id: id.into(),
            amount,
            date,
            category: category.into(),
            description: description.into(),
        })
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// When the spending happened
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for SpendingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.description,
            self.amount,
            self.category,
            self.date.format(WIRE_DATE_FORMAT)
        )
    }
}

/// JSON shape of a record as served by the transactions endpoint
#[derive(Serialize, Deserialize)]
struct WireRecord {
    id: RecordId,
    amount: Money,
    #[serde(with = "wire_date")]
    date: NaiveDateTime,
    category: String,
    description: String,
}

impl TryFrom<WireRecord> for SpendingRecord {
    type Error = RecordValidationError;

    fn try_from(wire: WireRecord) -> Result<Self, Self::Error> {
        SpendingRecord::new(
            wire.id,
            wire.amount,
            wire.date,
            wire.category,
            wire.description,
        )
    }
}

impl From<SpendingRecord> for WireRecord {
    fn from(record: SpendingRecord) -> Self {
        Self {
            id: record.id,
            amount: record.amount,
            date: record.date,
            category: record.category,
            description: record.description,
        }
    }
}

mod wire_date {
    use super::WIRE_DATE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(WIRE_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, WIRE_DATE_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid date '{}': {}", raw, e)))
    }
}

/// Validation errors for spending records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Spending amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}
