//! finance-tracker - per-category spending against fixed budget allocations
//!
//! Spending records come from a pluggable source (built-in sample data, an
//! HTTP endpoint, or a local JSON file). They are grouped into one summary per
//! budget allocation, and the summaries are shown in the terminal as a table,
//! as machine-readable exports, or in an interactive TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records, allocations, summaries and money
//! - `source`: Where spending records come from
//! - `services`: Aggregation and budget view state
//! - `display`: Plain-text formatting
//! - `export`: JSON, YAML and CSV output
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::models::Allocation;
//! use finance_tracker::services::aggregate;
//! use finance_tracker::source::{FixtureSource, SpendingSource};
//!
//! let records = FixtureSource::sample()?.fetch().await?;
//! let summaries = aggregate(&records, &Allocation::defaults());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod source;
pub mod tui;

pub use error::TrackerError;
