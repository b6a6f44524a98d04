//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::{mpsc, Arc};
use tokio::runtime::Handle;

use crate::config::Settings;
use crate::services::BudgetState;
use crate::source::SpendingSource;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Start a fetch on the runtime; the outcome comes back as `Event::Fetched`
fn spawn_fetch(runtime: &Handle, source: Arc<dyn SpendingSource>, sender: mpsc::Sender<Event>) {
    runtime.spawn(async move {
        let outcome = source.fetch().await.map_err(|e| e.to_string());
        if let Ok(records) = &outcome {
            tracing::info!(
                source = source.name(),
                records = records.len(),
                "fetched spending records"
            );
        }
        // Receiver is gone once the UI has quit
        let _ = sender.send(Event::Fetched(outcome));
    });
}

/// Run the TUI application
///
/// Blocks the calling thread; fetches run on `runtime`.
pub fn run_tui(settings: &Settings, source: Arc<dyn SpendingSource>, runtime: Handle) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(settings, BudgetState::default(), source.name());
    let events = EventHandler::default();

    // First load happens as soon as the view is up
    app.request_refresh();

    let outcome = event_loop(&mut terminal, &mut app, &events, &source, &runtime);

    restore_terminal()?;
    outcome
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    events: &EventHandler,
    source: &Arc<dyn SpendingSource>,
    runtime: &Handle,
) -> Result<()> {
    loop {
        if app.take_refresh_request() {
            spawn_fetch(runtime, Arc::clone(source), events.sender());
        }

        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
