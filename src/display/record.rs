//! Spending record display formatting

use crate::models::SpendingRecord;

use super::DisplayOptions;

/// Format records as a list, most recent first
pub fn format_record_list(records: &[SpendingRecord], options: &DisplayOptions) -> String {
    if records.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut sorted: Vec<&SpendingRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));

    let desc_width = sorted
        .iter()
        .map(|r| r.description().len())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14}  {:<width$}  {:<12}  {:>12}\n",
        "Date",
        "Description",
        "Category",
        "Amount",
        width = desc_width
    ));
    output.push_str(&format!(
        "{:-<14}  {:-<width$}  {:-<12}  {:->12}\n",
        "",
        "",
        "",
        "",
        width = desc_width
    ));

    for record in sorted {
        output.push_str(&format!(
            "{:<14}  {:<width$}  {:<12}  {:>12}\n",
            record.date().format(&options.date_format).to_string(),
            record.description(),
            record.category(),
            record.amount().format_with_symbol(&options.currency_symbol),
            width = desc_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn record(id: &str, day: u32, description: &str) -> SpendingRecord {
        let date = NaiveDate::from_ymd_opt(2025, 8, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        SpendingRecord::new(id, Money::from_cents(1234), date, "Food", description).unwrap()
    }

    #[test]
    fn test_format_empty() {
        let output = format_record_list(&[], &DisplayOptions::default());
        assert!(output.contains("No transactions found"));
    }

    #[test]
    fn test_most_recent_first() {
        let records = vec![record("1", 3, "Older"), record("2", 9, "Newer")];
        let output = format_record_list(&records, &DisplayOptions::default());

        let newer = output.find("Newer").unwrap();
        let older = output.find("Older").unwrap();
        assert!(newer < older);
        assert!(output.contains("$12.34"));
    }

    #[test]
    fn test_custom_currency() {
        let options = DisplayOptions {
            currency_symbol: "€".into(),
            date_format: "%Y-%m-%d".into(),
        };
        let output = format_record_list(&[record("1", 3, "Coffee")], &options);
        assert!(output.contains("€12.34"));
        assert!(output.contains("2025-08-03"));
    }
}
