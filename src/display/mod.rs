//! Display formatting for terminal output
//!
//! Formats records and budget summaries as plain text tables.

pub mod record;
pub mod summary;

use crate::config::Settings;

pub use record::format_record_list;
pub use summary::{format_summary_header, format_summary_list, Expand};

/// Presentation preferences taken from the settings
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}
