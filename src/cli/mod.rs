//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod records;
pub mod summary;

use clap::Args;
use std::path::PathBuf;

use crate::config::Settings;
use crate::source::SourceKind;

pub use config::{handle_config_command, ConfigCommands};
pub use records::{handle_records_command, RecordsArgs};
pub use summary::{handle_summary_command, OutputFormat, SummaryArgs};

/// Data source overrides shared by the fetching commands
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Where to read spending records from
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// Endpoint URL for the remote source (implies --source remote)
    #[arg(long)]
    pub url: Option<String>,

    /// JSON file for the file source (implies --source file)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl SourceArgs {
    /// Settings for this run with the overrides applied
    pub fn apply(&self, settings: &Settings) -> Settings {
        let mut effective = settings.clone();

        if let Some(url) = &self.url {
            effective.endpoint = url.clone();
            effective.source = SourceKind::Remote;
        }
        if let Some(file) = &self.file {
            effective.records_file = Some(file.clone());
            effective.source = SourceKind::File;
        }
        // An explicit --source wins over what --url or --file implied
        if let Some(kind) = self.source {
            effective.source = kind;
        }

        effective
    }
}
