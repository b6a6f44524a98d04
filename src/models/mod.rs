//! Core data models for finance-tracker
//!
//! Spending records as delivered by a data source, the allocation table, and
//! the per-category summaries built from them.

pub mod allocation;
pub mod ids;
pub mod money;
pub mod record;
pub mod summary;

pub use allocation::Allocation;
pub use ids::{RecordId, SummaryId};
pub use money::{Money, MAX_AMOUNT_CENTS};
pub use record::{RecordValidationError, SpendingRecord, WIRE_DATE_FORMAT};
pub use summary::BudgetCategorySummary;
