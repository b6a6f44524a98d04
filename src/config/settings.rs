//! User settings for finance-tracker
//!
//! Manages where spending records come from and how they are displayed.
//! The allocation table is deliberately not part of the settings.

use std::path::PathBuf;

use chrono::NaiveDate;
use std::fmt::Write;
use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::source::SourceKind;

/// Endpoint of the local transactions service
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/transactions";

/// User settings for finance-tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Which data source supplies spending records
    #[serde(default)]
    pub source: SourceKind,

    /// URL fetched by the remote source
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// JSON file read by the file source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_file: Option<PathBuf>,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for record listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            source: SourceKind::default(),
            endpoint: default_endpoint(),
            records_file: None,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;

        Ok(settings)
    }

    /// Check values that would otherwise only fail at display time
    pub fn validate(&self) -> Result<(), TrackerError> {
        // Record dates carry no timezone, so %Z / %z fail here too
        let sample = NaiveDate::from_ymd_opt(2025, 1, 31)
            .and_then(|d| d.and_hms_opt(13, 45, 0))
            .ok_or_else(|| TrackerError::Config("Invalid sample date".into()))?;
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&self.date_format)).is_err() {
            return Err(TrackerError::Config(format!(
                "Invalid date format: {}",
                self.date_format
            )));
        }
        if self.endpoint.trim().is_empty() {
            return Err(TrackerError::Config("Endpoint cannot be empty".into()));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.source, SourceKind::Fixture);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert!(settings.records_file.is_none());
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.source, SourceKind::Fixture);
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.source = SourceKind::Remote;
        settings.endpoint = "http://localhost:9000/tx".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.source, SourceKind::Remote);
        assert_eq!(loaded.endpoint, "http://localhost:9000/tx");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"source": "file"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.source, SourceKind::File);
        assert_eq!(loaded.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(loaded.date_format, "%b %-d, %Y");
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Y %"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.to_string().contains("Invalid date format"));
    }

    #[test]
    fn test_timezone_date_formats_rejected() {
        for format in ["%Y-%m-%d %Z", "%H:%M %z"] {
            let settings = Settings {
                date_format: format.into(),
                ..Settings::default()
            };
            let err = settings.validate().unwrap_err();
            assert!(err.to_string().contains("Invalid date format"), "{}", format);
        }

        assert!(Settings::default().validate().is_ok());
        let iso = Settings {
            date_format: "%Y-%m-%d %H:%M".into(),
            ..Settings::default()
        };
        assert!(iso.validate().is_ok());
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }
}
