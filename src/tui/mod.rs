//! Terminal User Interface module
//!
//! Interactive budget browser built on ratatui. Categories can be expanded
//! to show their records and the data source can be refreshed in place.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
