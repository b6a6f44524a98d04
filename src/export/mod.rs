//! Export module for finance-tracker
//!
//! Writes budget summaries in machine-readable formats:
//! - JSON: full summaries with records and export metadata
//! - YAML: the same document, human-readable
//! - CSV: one row per record, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

use clap::ValueEnum;
use std::io::Write;

use crate::error::TrackerResult;
use crate::models::BudgetCategorySummary;

pub use self::csv::export_summaries_csv;
pub use json::{export_summaries_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summaries_yaml;

/// Machine-readable output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

/// Write summaries in the requested format
pub fn export_summaries<W: Write>(
    format: ExportFormat,
    source: &str,
    summaries: &[BudgetCategorySummary],
    writer: &mut W,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Json => export_summaries_json(&SummaryExport::new(source, summaries), writer),
        ExportFormat::Yaml => export_summaries_yaml(&SummaryExport::new(source, summaries), writer),
        ExportFormat::Csv => export_summaries_csv(summaries, writer),
    }
}
