//! Service layer for finance-tracker
//!
//! Business logic on top of the models: the budget aggregator, the
//! expansion toggle, and the state those feed into.

pub mod aggregator;
pub mod expansion;
pub mod state;

pub use aggregator::{aggregate, unallocated};
pub use expansion::{toggle_expansion, ExpansionState};
pub use state::{fetch_event, refresh, BudgetEvent, BudgetState};
