//! Expansion state for the budget list
//!
//! Tracks which summaries are shown with their records listed underneath.

use std::collections::HashSet;

use crate::models::SummaryId;

/// The set of expanded summary ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<SummaryId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: SummaryId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SummaryId> {
        self.expanded.iter()
    }
}

impl FromIterator<SummaryId> for ExpansionState {
    fn from_iter<I: IntoIterator<Item = SummaryId>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().collect(),
        }
    }
}

/// Insert `id` if it is absent, remove it if present
pub fn toggle_expansion(mut state: ExpansionState, id: SummaryId) -> ExpansionState {
    if !state.expanded.remove(&id) {
        state.expanded.insert(id);
    }
    state
}
