//! Transactions view
//!
//! Every record from the last successful fetch, most recent first

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::SpendingRecord;
use crate::tui::app::App;

/// Render the transactions table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" Transactions ({}) ", app.records.len()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.records.is_empty() {
        let text = Paragraph::new("No transactions found.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.display.currency_symbol.as_str();
    let date_format = app.display.date_format.as_str();

    let mut sorted: Vec<&SpendingRecord> = app.records.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));

    let allocated: Vec<&str> = app
        .budget
        .allocations()
        .iter()
        .map(|a| a.name.as_str())
        .collect();

    let rows: Vec<Row> = sorted
        .iter()
        .map(|record| {
            // Records outside the allocation table never reach a summary
            let category_style = if allocated.contains(&record.category()) {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            Row::new(vec![
                Cell::from(record.date().format(date_format).to_string()),
                Cell::from(record.description().to_string()),
                Cell::from(record.category().to_string()).style(category_style),
                Cell::from(record.amount().format_with_symbol(symbol)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(12),
    ];

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Description"),
        Cell::from("Category"),
        Cell::from("Amount"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default();
    state.select(Some(app.selected_record_index));

    frame.render_stateful_widget(table, area, &mut state);
}
