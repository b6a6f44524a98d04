//! CLI commands for configuration

use clap::Subcommand;

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show paths and effective settings (default)
    Show,

    /// Write the default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

/// Handle config commands
pub fn handle_config_command(
    paths: &TrackerPaths,
    settings: &Settings,
    cmd: Option<ConfigCommands>,
) -> TrackerResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            println!("finance-tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() {
                    ""
                } else {
                    " (not created, using defaults)"
                }
            );
            println!();
            println!("Settings:");
            println!("  Source:          {}", settings.source);
            println!("  Endpoint:        {}", settings.endpoint);
            match &settings.records_file {
                Some(path) => println!("  Records file:    {}", path.display()),
                None => println!("  Records file:    (none)"),
            }
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        ConfigCommands::Init { force } => {
            if paths.is_initialized() && !force {
                println!(
                    "Settings file already exists: {}",
                    paths.settings_file().display()
                );
                println!("Use --force to overwrite it with defaults.");
                return Ok(());
            }
            Settings::default().save(paths)?;
            tracing::info!(path = %paths.settings_file().display(), "wrote default settings");
            println!("Wrote {}", paths.settings_file().display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceKind;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().join("fintrack"));

        handle_config_command(
            &paths,
            &Settings::default(),
            Some(ConfigCommands::Init { force: false }),
        )
        .unwrap();

        assert!(paths.is_initialized());
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.source, SourceKind::Fixture);
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"source": "remote"}"#).unwrap();

        handle_config_command(
            &paths,
            &Settings::default(),
            Some(ConfigCommands::Init { force: false }),
        )
        .unwrap();
        assert_eq!(
            Settings::load_or_create(&paths).unwrap().source,
            SourceKind::Remote
        );

        handle_config_command(
            &paths,
            &Settings::default(),
            Some(ConfigCommands::Init { force: true }),
        )
        .unwrap();
        assert_eq!(
            Settings::load_or_create(&paths).unwrap().source,
            SourceKind::Fixture
        );
    }
}
