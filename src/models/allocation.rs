//! Budget allocation model
//!
//! An allocation names a known category and its budget ceiling. The ordered
//! list of allocations decides both which categories exist and the order in
//! which their summaries are shown.

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// The fixed allocation table, in display order
const DEFAULT_ALLOCATIONS: [(&str, i64); 3] =
    [("Food", 200_00), ("Transport", 100_00), ("Shopping", 300_00)];

/// A (category name, allocated amount) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    /// Category name; records match it by exact string equality
    pub name: String,

    /// Budget ceiling for the category
    pub allocated: Money,
}

impl Allocation {
    pub fn new(name: impl Into<String>, allocated: Money) -> Self {
        Self {
            name: name.into(),
            allocated,
        }
    }

    /// The built-in allocation table: Food $200, Transport $100, Shopping $300
    pub fn defaults() -> Vec<Self> {
        DEFAULT_ALLOCATIONS
            .iter()
            .map(|(name, cents)| Self::new(*name, Money::from_cents(*cents)))
            .collect()
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.allocated)
    }
}
