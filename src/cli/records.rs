//! CLI command for the flat record list

use clap::Args;

use crate::config::Settings;
use crate::display::{format_record_list, DisplayOptions};
use crate::error::TrackerResult;
use crate::models::{Allocation, SpendingRecord};
use crate::services::unallocated;
use crate::source::build_source;

use super::SourceArgs;

/// Arguments for `fintrack records`
#[derive(Args, Debug, Clone, Default)]
pub struct RecordsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only show records whose category has no allocation
    #[arg(long)]
    pub unallocated: bool,
}

/// Handle the records command
pub async fn handle_records_command(settings: &Settings, args: RecordsArgs) -> TrackerResult<()> {
    let settings = args.source.apply(settings);
    let source = build_source(&settings)?;

    let records = match source.fetch().await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, source = source.name(), "fetch failed");
            eprintln!(
                "Could not load records from the {} source; no spending shown.",
                source.name()
            );
            Vec::new()
        }
    };

    let shown: Vec<SpendingRecord> = if args.unallocated {
        unallocated(&records, &Allocation::defaults())
            .into_iter()
            .cloned()
            .collect()
    } else {
        records
    };

    print!(
        "{}",
        format_record_list(&shown, &DisplayOptions::from(&settings))
    );
    if !shown.is_empty() {
        println!("{} record(s)", shown.len());
    }

    Ok(())
}
