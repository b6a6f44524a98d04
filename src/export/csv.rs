//! CSV Export functionality
//!
//! One row per record, carrying its category's totals so the file can be
//! pivoted in a spreadsheet. Categories without records get a single row
//! with empty record columns.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetCategorySummary, WIRE_DATE_FORMAT};
use std::io::Write;

const HEADER: [&str; 9] = [
    "Category",
    "Allocated",
    "Spent",
    "Remaining",
    "Record ID",
    "Date",
    "Description",
    "Amount",
    "Summary ID",
];

/// Export summaries to CSV
pub fn export_summaries_csv<W: Write>(
    summaries: &[BudgetCategorySummary],
    writer: W,
) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let map_err = |e: csv::Error| TrackerError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(map_err)?;

    for summary in summaries {
        let totals = [
            summary.name().to_string(),
            format!("{:.2}", summary.allocated().as_decimal()),
            format!("{:.2}", summary.spent().as_decimal()),
            format!("{:.2}", summary.remaining().as_decimal()),
        ];

        if summary.records().is_empty() {
            let mut row = totals.to_vec();
            row.extend([String::new(), String::new(), String::new(), String::new()]);
            row.push(summary.id().as_uuid().to_string());
            csv_writer.write_record(&row).map_err(map_err)?;
            continue;
        }

        for record in summary.records() {
            let mut row = totals.to_vec();
            row.push(record.id().to_string());
            row.push(record.date().format(WIRE_DATE_FORMAT).to_string());
            row.push(record.description().to_string());
            row.push(format!("{:.2}", record.amount().as_decimal()));
            row.push(summary.id().as_uuid().to_string());
            csv_writer.write_record(&row).map_err(map_err)?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
