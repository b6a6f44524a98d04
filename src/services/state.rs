//! Budget view state
//!
//! `BudgetState` is owned by whoever presents it (the CLI handlers or the
//! TUI `App`). It changes only through [`BudgetState::apply`]: a finished
//! fetch replaces the summary list in one assignment, a toggle replaces the
//! expansion set. A failed fetch changes nothing.

use tracing::{info, warn};

use crate::models::{Allocation, BudgetCategorySummary, Money, SpendingRecord, SummaryId};
use crate::source::SpendingSource;

use super::aggregator::aggregate;
use super::expansion::{toggle_expansion, ExpansionState};

/// Something that happened to the budget view
#[derive(Debug, Clone)]
pub enum BudgetEvent {
    /// A fetch finished with these records
    RecordsLoaded(Vec<SpendingRecord>),
    /// A fetch failed; the message is for diagnostics only
    FetchFailed(String),
    /// The user toggled a category open or closed
    ToggleExpansion(SummaryId),
    /// Expand every current summary
    ExpandAll,
    /// Collapse everything
    CollapseAll,
}

/// Summaries plus the expansion set, rebuilt on every successful fetch
#[derive(Debug, Clone)]
pub struct BudgetState {
    allocations: Vec<Allocation>,
    summaries: Vec<BudgetCategorySummary>,
    expanded: ExpansionState,
    loaded: bool,
}

impl BudgetState {
    /// Create an empty state over the given allocation table
    pub fn new(allocations: Vec<Allocation>) -> Self {
        Self {
            allocations,
            summaries: Vec::new(),
            expanded: ExpansionState::new(),
            loaded: false,
        }
    }

    /// Apply an event; the only way the state changes
    pub fn apply(&mut self, event: BudgetEvent) {
        match event {
            BudgetEvent::RecordsLoaded(records) => {
                self.summaries = aggregate(&records, &self.allocations);
                // Rebuilt summaries carry fresh ids; old entries would match nothing
                self.expanded = ExpansionState::new();
                self.loaded = true;
            }
            BudgetEvent::FetchFailed(reason) => {
                warn!(%reason, "fetch failed, keeping previous summaries");
            }
            BudgetEvent::ToggleExpansion(id) => {
                self.expanded = toggle_expansion(std::mem::take(&mut self.expanded), id);
            }
            BudgetEvent::ExpandAll => {
                self.expanded = self.summaries.iter().map(|s| s.id()).collect();
            }
            BudgetEvent::CollapseAll => {
                self.expanded = ExpansionState::new();
            }
        }
    }

    pub fn summaries(&self) -> &[BudgetCategorySummary] {
        &self.summaries
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expanded
    }

    pub fn is_expanded(&self, id: SummaryId) -> bool {
        self.expanded.contains(id)
    }

    /// Whether any fetch has succeeded yet
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn total_allocated(&self) -> Money {
        self.summaries.iter().map(|s| s.allocated()).sum()
    }

    pub fn total_spent(&self) -> Money {
        self.summaries.iter().map(|s| s.spent()).sum()
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::new(Allocation::defaults())
    }
}

/// Turn a fetch outcome into the event that records it
pub fn fetch_event<E: std::fmt::Display>(outcome: Result<Vec<SpendingRecord>, E>) -> BudgetEvent {
    match outcome {
        Ok(records) => BudgetEvent::RecordsLoaded(records),
        Err(e) => BudgetEvent::FetchFailed(e.to_string()),
    }
}

/// Fetch once from `source` and apply the outcome.
///
/// Returns whether the fetch succeeded. There is no retry; on failure the
/// previous summaries stay in place.
pub async fn refresh(state: &mut BudgetState, source: &dyn SpendingSource) -> bool {
    let outcome = source.fetch().await;
    let succeeded = outcome.is_ok();
    if let Ok(records) = &outcome {
        info!(source = source.name(), records = records.len(), "fetched spending records");
    }
    state.apply(fetch_event(outcome));
    succeeded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TrackerError, TrackerResult};
    use async_trait::async_trait;
    use chrono::NaiveDate;

    fn record(id: &str, cents: i64, category: &str) -> SpendingRecord {
        let date = NaiveDate::from_ymd_opt(2025, 8, 24)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        SpendingRecord::new(id, Money::from_cents(cents), date, category, "test").unwrap()
    }

    struct Failing;

    #[async_trait]
    impl SpendingSource for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch(&self) -> TrackerResult<Vec<SpendingRecord>> {
            Err(TrackerError::Fetch("connection refused".into()))
        }
    }

    struct Fixed(Vec<SpendingRecord>);

    #[async_trait]
    impl SpendingSource for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch(&self) -> TrackerResult<Vec<SpendingRecord>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = BudgetState::default();
        assert!(state.summaries().is_empty());
        assert!(!state.is_loaded());
        assert_eq!(state.allocations().len(), 3);
    }

    #[test]
    fn test_records_loaded_rebuilds_summaries() {
        let mut state = BudgetState::default();
        state.apply(BudgetEvent::RecordsLoaded(vec![
            record("1", 2000, "Food"),
            record("2", 5000, "Transport"),
        ]));

        assert!(state.is_loaded());
        assert_eq!(state.summaries().len(), 3);
        assert_eq!(state.total_spent(), Money::from_cents(7000));
        assert_eq!(state.total_allocated(), Money::from_cents(60000));
    }

    #[test]
    fn test_fetch_failure_keeps_previous_summaries() {
        let mut state = BudgetState::default();
        state.apply(BudgetEvent::RecordsLoaded(vec![record("1", 2000, "Food")]));
        let before = state.summaries().to_vec();

        state.apply(BudgetEvent::FetchFailed("timeout".into()));
        assert_eq!(state.summaries(), before.as_slice());
    }

    #[test]
    fn test_toggle_and_bulk_expansion() {
        let mut state = BudgetState::default();
        state.apply(BudgetEvent::RecordsLoaded(Vec::new()));
        let food = state.summaries()[0].id();

        state.apply(BudgetEvent::ToggleExpansion(food));
        assert!(state.is_expanded(food));
        state.apply(BudgetEvent::ToggleExpansion(food));
        assert!(!state.is_expanded(food));

        state.apply(BudgetEvent::ExpandAll);
        assert_eq!(state.expansion().len(), 3);
        state.apply(BudgetEvent::CollapseAll);
        assert!(state.expansion().is_empty());
    }

    #[test]
    fn test_reload_issues_new_ids() {
        let mut state = BudgetState::default();
        state.apply(BudgetEvent::RecordsLoaded(Vec::new()));
        let old = state.summaries()[0].id();
        state.apply(BudgetEvent::ToggleExpansion(old));

        state.apply(BudgetEvent::RecordsLoaded(Vec::new()));
        let new = state.summaries()[0].id();
        assert_ne!(old, new);
        assert!(!state.is_expanded(new));
    }

    #[test]
    fn test_reload_clears_expansion_set() {
        let mut state = BudgetState::default();
        state.apply(BudgetEvent::RecordsLoaded(Vec::new()));
        state.apply(BudgetEvent::ExpandAll);
        assert_eq!(state.expansion().len(), 3);

        state.apply(BudgetEvent::RecordsLoaded(vec![record("1", 2000, "Food")]));
        assert!(state.expansion().is_empty());

        state.apply(BudgetEvent::ExpandAll);
        state.apply(BudgetEvent::FetchFailed("timeout".into()));
        assert_eq!(state.expansion().len(), 3);
    }

    #[tokio::test]
    async fn test_refresh_success() {
        let mut state = BudgetState::default();
        let source = Fixed(vec![record("1", 1500, "Shopping")]);

        assert!(refresh(&mut state, &source).await);
        assert_eq!(state.summaries()[2].spent(), Money::from_cents(1500));
    }

    #[tokio::test]
    async fn test_refresh_failure_is_swallowed() {
        let mut state = BudgetState::default();
        assert!(!refresh(&mut state, &Failing).await);
        assert!(state.summaries().is_empty());
        assert!(!state.is_loaded());
    }
}
