//! JSON Export functionality
//!
//! Exports the budget summaries with their records, plus export metadata.

use crate::error::{TrackerError, TrackerResult};
use crate::models::BudgetCategorySummary;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export document wrapping a set of summaries
#[derive(Debug, Clone, Serialize)]
pub struct SummaryExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Name of the source the records came from
    pub source: &'a str,

    /// Summaries in allocation order
    pub summaries: &'a [BudgetCategorySummary],
}

impl<'a> SummaryExport<'a> {
    pub fn new(source: &'a str, summaries: &'a [BudgetCategorySummary]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            source,
            summaries,
        }
    }
}

/// Export summaries as pretty-printed JSON
pub fn export_summaries_json<W: Write>(
    export: &SummaryExport<'_>,
    writer: &mut W,
) -> TrackerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
