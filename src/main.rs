use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;
use tracing_subscriber::{fmt, fmt::MakeWriter, prelude::*, EnvFilter};

use finance_tracker::cli::{
    handle_config_command, handle_records_command, handle_summary_command, ConfigCommands,
    RecordsArgs, SourceArgs, SummaryArgs,
};
use finance_tracker::config::{Settings, TrackerPaths};
use finance_tracker::source::{build_source, SpendingSource};
use finance_tracker::tui::run_tui;

/// `json` switches log lines to JSON
const LOG_FORMAT_ENV: &str = "FINTRACK_LOG_FORMAT";
/// File that receives logs while the TUI owns the terminal
const LOG_FILE_ENV: &str = "FINTRACK_LOG_FILE";

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Track spending against per-category budgets",
    long_about = "fintrack fetches spending records, groups them by category and \
                  shows how much of each category's allocation has been spent, \
                  from the command line or an interactive TUI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show spent vs allocated for each budget category
    Summary(SummaryArgs),

    /// List spending records, most recent first
    #[command(alias = "transactions")]
    Records(RecordsArgs),

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui(SourceArgs),

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn init_tracing<W>(writer: W, ansi: bool)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(writer),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI draws on the alternate screen, so it only logs to a file
    if matches!(cli.command, Some(Commands::Tui(_))) {
        if let Ok(path) = std::env::var(LOG_FILE_ENV) {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_tracing(Mutex::new(file), false);
        }
    } else {
        init_tracing(std::io::stderr, true);
    }

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Summary(args)) => {
            handle_summary_command(&settings, args).await?;
        }
        Some(Commands::Records(args)) => {
            handle_records_command(&settings, args).await?;
        }
        Some(Commands::Tui(args)) => {
            let settings = args.apply(&settings);
            let source: Arc<dyn SpendingSource> = Arc::from(build_source(&settings)?);
            let runtime = Handle::current();
            tokio::task::block_in_place(|| run_tui(&settings, source, runtime))?;
        }
        Some(Commands::Config { command }) => {
            handle_config_command(&paths, &settings, command)?;
        }
        None => {
            println!("fintrack - budget tracking in the terminal");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack summary' to see spending per category.");
            println!("Run 'fintrack tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
