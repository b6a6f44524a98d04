//! Budget aggregation
//!
//! Partitions a flat list of spending records by the categories named in the
//! allocation table and builds one summary per allocation.

use tracing::{debug, trace};

use crate::models::{Allocation, BudgetCategorySummary, SpendingRecord};

/// Build one summary per allocation, in allocation order.
///
/// Each summary holds the records whose category equals the allocation name,
/// sorted most recent first. The sort is stable, so records with the same
/// timestamp keep their input order. Records matching no allocation are
/// dropped. Allocations without records still get an (empty) summary.
pub fn aggregate(
    records: &[SpendingRecord],
    allocations: &[Allocation],
) -> Vec<BudgetCategorySummary> {
    let summaries: Vec<_> = allocations
        .iter()
        .map(|allocation| {
            let mut matching: Vec<SpendingRecord> = records
                .iter()
                .filter(|r| r.category() == allocation.name)
                .cloned()
                .collect();
            matching.sort_by(|a, b| b.date().cmp(&a.date()));

            trace!(
                category = %allocation.name,
                records = matching.len(),
                "aggregated category"
            );
            BudgetCategorySummary::from_sorted(&allocation.name, allocation.allocated, matching)
        })
        .collect();

    let dropped = unallocated(records, allocations).len();
    if dropped > 0 {
        debug!(dropped, "records outside the allocation table were ignored");
    }

    summaries
}

/// Records whose category matches none of the allocations, in input order
pub fn unallocated<'a>(
    records: &'a [SpendingRecord],
    allocations: &[Allocation],
) -> Vec<&'a SpendingRecord> {
    records
        .iter()
        .filter(|r| !allocations.iter().any(|a| a.name == r.category()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn record(id: &str, dollars: i64, category: &str, date: NaiveDateTime) -> SpendingRecord {
        SpendingRecord::new(id, Money::from_cents(dollars * 100), date, category, id).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let t1 = at(20, 9);
        let t2 = at(21, 9);
        let records = vec![
            record("food-t1", 20, "Food", t1),
            record("food-t2", 10, "Food", t2),
            record("taxi", 50, "Transport", at(22, 9)),
            record("clothes", 100, "Shopping", at(23, 9)),
        ];

        let summaries = aggregate(&records, &Allocation::defaults());
        assert_eq!(summaries.len(), 3);

        let food = &summaries[0];
        assert_eq!(food.name(), "Food");
        let ids: Vec<_> = food.records().iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, ["food-t2", "food-t1"]);
        assert_eq!(food.spent(), Money::from_cents(3000));

        assert_eq!(summaries[1].name(), "Transport");
        assert_eq!(summaries[1].spent(), Money::from_cents(5000));
        assert_eq!(summaries[2].name(), "Shopping");
        assert_eq!(summaries[2].spent(), Money::from_cents(10000));
    }

    #[test]
    fn test_empty_records_yield_empty_summaries() {
        let summaries = aggregate(&[], &Allocation::defaults());
        assert_eq!(summaries.len(), 3);
        for summary in &summaries {
            assert!(summary.records().is_empty());
            assert!(summary.spent().is_zero());
        }
    }

    #[test]
    fn test_empty_allocations_yield_nothing() {
        let records = vec![record("a", 5, "Food", at(1, 0))];
        assert!(aggregate(&records, &[]).is_empty());
    }

    #[test]
    fn test_unknown_category_is_dropped() {
        let records = vec![
            record("movie", 15, "Entertainment", at(5, 20)),
            record("lunch", 12, "Food", at(5, 12)),
        ];

        let summaries = aggregate(&records, &Allocation::defaults());
        assert_eq!(summaries.len(), 3);
        assert!(summaries
            .iter()
            .flat_map(|s| s.records())
            .all(|r| r.category() != "Entertainment"));

        let dropped = unallocated(&records, &Allocation::defaults());
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].id().as_str(), "movie");
    }

    #[test]
    fn test_output_follows_allocation_order() {
        let allocations = vec![
            Allocation::new("Shopping", Money::from_cents(100)),
            Allocation::new("Food", Money::from_cents(100)),
        ];
        let summaries = aggregate(&[], &allocations);
        let names: Vec<_> = summaries.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Shopping", "Food"]);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let same = at(10, 10);
        let records = vec![
            record("first", 1, "Food", same),
            record("older", 1, "Food", at(9, 10)),
            record("second", 1, "Food", same),
            record("newest", 1, "Food", at(11, 10)),
            record("third", 1, "Food", same),
        ];

        let summaries = aggregate(&records, &Allocation::defaults());
        let ids: Vec<_> = summaries[0].records().iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, ["newest", "first", "second", "third", "older"]);
    }

    #[test]
    fn test_every_record_matches_its_summary() {
        let records: Vec<_> = ["Food", "Transport", "Shopping", "Rent", "Food"]
            .iter()
            .enumerate()
            .map(|(i, c)| record(&i.to_string(), i as i64 + 1, c, at(i as u32 + 1, 0)))
            .collect();

        for summary in aggregate(&records, &Allocation::defaults()) {
            assert!(summary.records().iter().all(|r| r.category() == summary.name()));
            let total: Money = summary.records().iter().map(|r| r.amount()).sum();
            assert_eq!(summary.spent(), total);
            assert!(summary
                .records()
                .windows(2)
                .all(|pair| pair[0].date() >= pair[1].date()));
        }
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let records = vec![record("x", 3, "food", at(1, 0))];
        let summaries = aggregate(&records, &Allocation::defaults());
        assert!(summaries[0].records().is_empty());
    }

    #[test]
    fn test_duplicate_allocation_names_each_get_a_summary() {
        let allocations = vec![
            Allocation::new("Food", Money::from_cents(100)),
            Allocation::new("Food", Money::from_cents(200)),
        ];
        let records = vec![record("a", 4, "Food", at(1, 0))];

        let summaries = aggregate(&records, &allocations);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].spent(), summaries[1].spent());
        assert_ne!(summaries[0].id(), summaries[1].id());
    }

    #[test]
    fn test_rebuild_gets_fresh_ids() {
        let first = aggregate(&[], &Allocation::defaults());
        let second = aggregate(&[], &Allocation::defaults());
        for (a, b) in first.iter().zip(&second) {
            assert_ne!(a.id(), b.id());
        }
    }
}
