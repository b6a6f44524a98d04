//! Budget category summary model
//!
//! A summary is the aggregated view of one category: the records filed under
//! it (most recent first) and the amount spent. The spent amount is never
//! stored; it is summed from the records every time it is asked for, so it
//! cannot drift from them.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::ids::SummaryId;
use super::money::Money;
use super::record::SpendingRecord;

/// Aggregated view of one budget category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetCategorySummary {
    id: SummaryId,
    name: String,
    allocated: Money,
    records: Vec<SpendingRecord>,
}

impl BudgetCategorySummary {
    /// Build a summary from records that already belong to `name` and are
    /// already in display order. Only the aggregator calls this.
    pub(crate) fn from_sorted(
        name: impl Into<String>,
        allocated: Money,
        records: Vec<SpendingRecord>,
    ) -> Self {
        let name = name.into();
        debug_assert!(records.iter().all(|r| r.category() == name));
        Self {
            id: SummaryId::new(),
            name,
            allocated,
            records,
        }
    }

    pub fn id(&self) -> SummaryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Budget ceiling for this category
    pub fn allocated(&self) -> Money {
        self.allocated
    }

    /// Records in this category, most recent first
    pub fn records(&self) -> &[SpendingRecord] {
        &self.records
    }

    /// Total spent: the sum of the records' amounts
    pub fn spent(&self) -> Money {
        self.records.iter().map(SpendingRecord::amount).sum()
    }

    /// Allocated minus spent; negative once the category is overspent
    pub fn remaining(&self) -> Money {
        self.allocated - self.spent()
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent() > self.allocated
    }

    /// Share of the allocation already spent, in percent
    ///
    /// A zero allocation reports 0% when nothing is spent and 100% otherwise.
    pub fn usage_percent(&self) -> f64 {
        let spent = self.spent();
        if self.allocated.is_zero() {
            return if spent.is_zero() { 0.0 } else { 100.0 };
        }
        spent.cents() as f64 / self.allocated.cents() as f64 * 100.0
    }
}

impl Serialize for BudgetCategorySummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BudgetCategorySummary", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("allocated", &self.allocated)?;
        state.serialize_field("spent", &self.spent())?;
        state.serialize_field("remaining", &self.remaining())?;
        state.serialize_field("records", &self.records)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn food(id: &str, cents: i64, day: u32) -> SpendingRecord {
        let date = NaiveDate::from_ymd_opt(2025, 8, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        SpendingRecord::new(id, Money::from_cents(cents), date, "Food", "Meal").unwrap()
    }

    #[test]
    fn test_spent_is_sum_of_records() {
        let summary = BudgetCategorySummary::from_sorted(
            "Food",
            Money::from_cents(20000),
            vec![food("2", 1000, 24), food("1", 2000, 23)],
        );
        assert_eq!(summary.spent(), Money::from_cents(3000));
        assert_eq!(summary.remaining(), Money::from_cents(17000));
        assert!(!summary.is_over_budget());
        assert!((summary.usage_percent() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let summary =
            BudgetCategorySummary::from_sorted("Food", Money::from_cents(20000), Vec::new());
        assert!(summary.spent().is_zero());
        assert_eq!(summary.remaining(), summary.allocated());
        assert_eq!(summary.usage_percent(), 0.0);
    }

    #[test]
    fn test_over_budget() {
        let summary = BudgetCategorySummary::from_sorted(
            "Food",
            Money::from_cents(1500),
            vec![food("1", 2000, 23)],
        );
        assert!(summary.is_over_budget());
        assert_eq!(summary.remaining(), Money::from_cents(-500));
    }

    #[test]
    fn test_zero_allocation_usage() {
        let summary =
            BudgetCategorySummary::from_sorted("Food", Money::zero(), vec![food("1", 100, 23)]);
        assert_eq!(summary.usage_percent(), 100.0);
    }

    #[test]
    fn test_serialization_includes_derived_fields() {
        let summary = BudgetCategorySummary::from_sorted(
            "Food",
            Money::from_cents(20000),
            vec![food("1", 2000, 23)],
        );
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["name"], "Food");
        assert_eq!(value["allocated"], 200.0);
        assert_eq!(value["spent"], 20.0);
        assert_eq!(value["remaining"], 180.0);
        assert_eq!(value["records"].as_array().unwrap().len(), 1);
    }
}
