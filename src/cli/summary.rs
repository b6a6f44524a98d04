//! CLI command for budget summaries
//!
//! Fetches once from the selected source, aggregates against the allocation
//! table and prints the result.

use clap::{Args, ValueEnum};
use std::io;

use crate::config::Settings;
use crate::display::{format_summary_list, DisplayOptions, Expand};
use crate::error::TrackerResult;
use crate::export::{export_summaries, ExportFormat};
use crate::services::{refresh, BudgetState};
use crate::source::build_source;

use super::SourceArgs;

/// Output formats for the summary command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
}

impl OutputFormat {
    fn export_format(self) -> Option<ExportFormat> {
        match self {
            Self::Text => None,
            Self::Json => Some(ExportFormat::Json),
            Self::Yaml => Some(ExportFormat::Yaml),
            Self::Csv => Some(ExportFormat::Csv),
        }
    }
}

/// Arguments for `fintrack summary`
#[derive(Args, Debug, Clone, Default)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List each category's records under it
    #[arg(short, long)]
    pub expand: bool,
}

/// Handle the summary command
pub async fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> TrackerResult<()> {
    let settings = args.source.apply(settings);
    let source = build_source(&settings)?;

    let mut state = BudgetState::default();
    if !refresh(&mut state, source.as_ref()).await {
        eprintln!(
            "Could not load records from the {} source; no spending shown.",
            source.name()
        );
    }

    match args.format.export_format() {
        Some(format) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_summaries(format, source.name(), state.summaries(), &mut handle)?;
        }
        None => {
            let expand = if args.expand { Expand::All } else { Expand::None };
            print!(
                "{}",
                format_summary_list(state.summaries(), expand, &DisplayOptions::from(&settings))
            );
        }
    }

    Ok(())
}
