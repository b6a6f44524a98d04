//! Budget view
//!
//! One row per category with spent / allocated. Expanded categories list
//! their records underneath, most recent first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_summary_header;
use crate::models::BudgetCategorySummary;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// Render the budget view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    render_header(frame, app, layout.header);
    render_category_table(frame, app, layout.content);
}

/// Totals across all categories plus key hints
fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let symbol = app.display.currency_symbol.as_str();
    let spent = app.budget.total_spent();
    let allocated = app.budget.total_allocated();

    let total_color = if spent > allocated {
        Color::Red
    } else {
        Color::Green
    };

    let block = Block::default()
        .title(" Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let line = Line::from(vec![
        Span::styled("Total spent: ", Style::default().fg(Color::White)),
        Span::styled(
            format!(
                "{} / {}",
                spent.format_with_symbol(symbol),
                allocated.format_with_symbol(symbol)
            ),
            Style::default()
                .fg(total_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled("[Enter] Toggle  ", Style::default().fg(Color::Yellow)),
        Span::styled("[e/c] Expand/Collapse all  ", Style::default().fg(Color::Yellow)),
        Span::styled("[r] Refresh", Style::default().fg(Color::Yellow)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn usage_style(summary: &BudgetCategorySummary) -> Style {
    if summary.is_over_budget() {
        Style::default().fg(Color::Red)
    } else if summary.usage_percent() >= 80.0 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    }
}

/// Render the category table with record rows under expanded categories
fn render_category_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if !app.budget.is_loaded() {
        let message = if app.fetch_in_flight {
            "Loading spending records..."
        } else {
            "No data loaded. Press r to fetch."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.display.currency_symbol.as_str();
    let date_format = app.display.date_format.as_str();

    let mut rows: Vec<Row> = Vec::new();
    // Row index of each summary, for mapping the selection
    let mut summary_rows: Vec<usize> = Vec::new();

    for summary in app.budget.summaries() {
        let expanded = app.budget.is_expanded(summary.id());
        let marker = if expanded { "▼" } else { "▶" };

        summary_rows.push(rows.len());
        rows.push(
            Row::new(vec![
                Cell::from(format!("{} {}", marker, summary.name())),
                Cell::from(format_summary_header(summary, symbol)),
                Cell::from(summary.remaining().format_with_symbol(symbol))
                    .style(usage_style(summary)),
                Cell::from(format!("{:.0}%", summary.usage_percent())).style(usage_style(summary)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        );

        if !expanded {
            continue;
        }

        if summary.records().is_empty() {
            rows.push(
                Row::new(vec![Cell::from("    (no spending)")])
                    .style(Style::default().fg(Color::DarkGray)),
            );
        }
        for record in summary.records() {
            rows.push(
                Row::new(vec![
                    Cell::from(format!("    {}", record.description())),
                    Cell::from(record.amount().format_with_symbol(symbol)),
                    Cell::from(record.date().format(date_format).to_string()),
                    Cell::from(""),
                ])
                .style(Style::default().fg(Color::Gray)),
            );
        }
    }

    let widths = [
        Constraint::Min(20),
        Constraint::Length(28),
        Constraint::Length(14),
        Constraint::Length(8),
    ];

    let header = Row::new(vec![
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Spent").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Remaining").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Used").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default();
    state.select(summary_rows.get(app.selected_summary_index).copied());

    frame.render_stateful_widget(table, area, &mut state);
}
