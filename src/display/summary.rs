//! Budget summary display formatting
//!
//! Formats category summaries for terminal output, optionally listing each
//! expanded category's records underneath it.

use crate::models::BudgetCategorySummary;
use crate::services::ExpansionState;

use super::DisplayOptions;

/// Which summaries to show expanded
#[derive(Debug, Clone, Copy)]
pub enum Expand<'a> {
    None,
    All,
    Only(&'a ExpansionState),
}

impl Expand<'_> {
    fn includes(&self, summary: &BudgetCategorySummary) -> bool {
        match self {
            Expand::None => false,
            Expand::All => true,
            Expand::Only(state) => state.contains(summary.id()),
        }
    }
}

/// Format the budget summaries as a table with one row per category
pub fn format_summary_list(
    summaries: &[BudgetCategorySummary],
    expand: Expand<'_>,
    options: &DisplayOptions,
) -> String {
    if summaries.is_empty() {
        return "No budget categories to show.".to_string();
    }

    let symbol = options.currency_symbol.as_str();
    let name_width = summaries
        .iter()
        .map(|s| s.name().len() + 2)
        .max()
        .unwrap_or(8)
        .max(10);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}  {:>6}\n",
        "Category",
        "Spent",
        "Allocated",
        "Remaining",
        "Used",
        width = name_width
    ));
    output.push_str(&format!("{}\n", "-".repeat(name_width + 52)));

    for summary in summaries {
        let expanded = expand.includes(summary);
        let marker = if expanded { "▼" } else { "▶" };
        let over = if summary.is_over_budget() { " !" } else { "" };

        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>12}  {:>5.0}%{}\n",
            format!("{} {}", marker, summary.name()),
            summary.spent().format_with_symbol(symbol),
            summary.allocated().format_with_symbol(symbol),
            summary.remaining().format_with_symbol(symbol),
            summary.usage_percent(),
            over,
            width = name_width
        ));

        if expanded {
            if summary.records().is_empty() {
                output.push_str("    (no spending)\n");
            }
            for record in summary.records() {
                output.push_str(&format!(
                    "    {:<24} {:>12}  {}\n",
                    record.description(),
                    record.amount().format_with_symbol(symbol),
                    record.date().format(&options.date_format)
                ));
            }
        }
    }

    let total_spent: crate::models::Money = summaries.iter().map(|s| s.spent()).sum();
    let total_allocated: crate::models::Money = summaries.iter().map(|s| s.allocated()).sum();
    output.push_str(&format!("{}\n", "-".repeat(name_width + 52)));
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}\n",
        "Total",
        total_spent.format_with_symbol(symbol),
        total_allocated.format_with_symbol(symbol),
        (total_allocated - total_spent).format_with_symbol(symbol),
        width = name_width
    ));

    output
}

/// One-line header for a summary, as shown in the budget list
pub fn format_summary_header(summary: &BudgetCategorySummary, symbol: &str) -> String {
    format!(
        "Spent: {} / {}",
        summary.spent().format_with_symbol(symbol),
        summary.allocated().format_with_symbol(symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Allocation, Money, SpendingRecord};
    use crate::services::{aggregate, toggle_expansion};
    use chrono::NaiveDate;

    fn summaries() -> Vec<BudgetCategorySummary> {
        let date = NaiveDate::from_ymd_opt(2025, 8, 24)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let records = vec![
            SpendingRecord::new("1", Money::from_cents(2000), date, "Food", "Lunch").unwrap(),
            SpendingRecord::new("2", Money::from_cents(12000), date, "Transport", "Train pass")
                .unwrap(),
        ];
        aggregate(&records, &Allocation::defaults())
    }

    #[test]
    fn test_format_empty() {
        let output = format_summary_list(&[], Expand::All, &DisplayOptions::default());
        assert!(output.contains("No budget categories"));
    }

    #[test]
    fn test_collapsed_list_hides_records() {
        let output = format_summary_list(&summaries(), Expand::None, &DisplayOptions::default());
        assert!(output.contains("▶ Food"));
        assert!(output.contains("$20.00"));
        assert!(output.contains("$200.00"));
        assert!(!output.contains("Lunch"));
    }

    #[test]
    fn test_expand_all_lists_records() {
        let output = format_summary_list(&summaries(), Expand::All, &DisplayOptions::default());
        assert!(output.contains("▼ Food"));
        assert!(output.contains("Lunch"));
        assert!(output.contains("Aug 24, 2025"));
        assert!(output.contains("(no spending)"));
    }

    #[test]
    fn test_expand_only_selected() {
        let summaries = summaries();
        let state = toggle_expansion(ExpansionState::new(), summaries[1].id());
        let output =
            format_summary_list(&summaries, Expand::Only(&state), &DisplayOptions::default());
        assert!(output.contains("Train pass"));
        assert!(!output.contains("Lunch"));
    }

    #[test]
    fn test_over_budget_marker_and_total() {
        let output = format_summary_list(&summaries(), Expand::None, &DisplayOptions::default());
        assert!(output.contains("-$20.00"));
        assert!(output.contains(" !"));
        assert!(output.contains("$140.00"));
        assert!(output.contains("$600.00"));
    }

    #[test]
    fn test_header_line() {
        let header = format_summary_header(&summaries()[0], "$");
        assert_eq!(header, "Spent: $20.00 / $200.00");
    }
}
