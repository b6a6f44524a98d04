//! YAML Export functionality
//!
//! Exports the budget summaries to YAML for human-readable output.

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::SummaryExport;
use std::io::Write;

/// Export summaries as YAML with a short comment header
pub fn export_summaries_yaml<W: Write>(
    export: &SummaryExport<'_>,
    writer: &mut W,
) -> TrackerResult<()> {
    writeln!(writer, "# finance-tracker budget summary")
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Source: {}", export.source)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
