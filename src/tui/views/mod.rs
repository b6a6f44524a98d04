//! TUI Views module
//!
//! The budget and transactions views plus the status bar.

pub mod budget;
pub mod status_bar;
pub mod transactions;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    match app.active_view {
        ActiveView::Budget => budget::render(frame, app, layout.main),
        ActiveView::Transactions => transactions::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::BudgetState;
    use crate::source::{FixtureSource, SpendingSource};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn loaded(settings: &Settings) -> App<'_> {
        let records = FixtureSource::sample().unwrap().fetch().await.unwrap();
        let mut app = App::new(settings, BudgetState::default(), "fixture");
        app.finish_fetch(Ok(records));
        app
    }

    #[test]
    fn test_renders_placeholder_before_first_fetch() {
        let settings = Settings::default();
        let mut app = App::new(&settings, BudgetState::default(), "fixture");
        assert!(screen(&mut app).contains("No data loaded"));
    }

    #[tokio::test]
    async fn test_budget_view_headers() {
        let settings = Settings::default();
        let mut app = loaded(&settings).await;
        let text = screen(&mut app);

        assert!(text.contains("▶ Food"));
        assert!(text.contains("Spent: $20.00 / $200.00"));
        assert!(text.contains("Spent: $100.00 / $300.00"));
        assert!(!text.contains("Lunch"));
    }

    #[tokio::test]
    async fn test_expanded_category_lists_records() {
        let settings = Settings::default();
        let mut app = loaded(&settings).await;
        app.toggle_selected();
        let text = screen(&mut app);

        assert!(text.contains("▼ Food"));
        assert!(text.contains("Lunch"));
        assert!(text.contains("Aug 24, 2025"));
    }

    #[tokio::test]
    async fn test_transactions_view_and_help() {
        let settings = Settings::default();
        let mut app = loaded(&settings).await;
        app.switch_view(ActiveView::Transactions);
        let text = screen(&mut app);
        assert!(text.contains("Transactions (3)"));
        assert!(text.contains("Taxi"));

        app.open_dialog(ActiveDialog::Help);
        assert!(screen(&mut app).contains("Keyboard Shortcuts"));
    }
}
