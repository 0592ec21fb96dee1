//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_ultimate::RuleSettings;
use tracing::{debug, info, instrument};

/// Top-level configuration for the terminal front end.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rule variations passed to the engine.
    #[serde(default)]
    rules: RuleSettings,

    /// Board rendering options.
    #[serde(default)]
    display: DisplayConfig,

    /// Tracing filter directive (e.g. "debug,strictly_ultimate=trace").
    #[serde(default)]
    log_filter: Option<String>,
}

/// How the board is drawn.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show empty spots as their spot index instead of a dot.
    #[serde(default = "default_show_spot_numbers")]
    show_spot_numbers: bool,

    /// Symbol drawn for player X.
    #[serde(default = "default_x_symbol")]
    x_symbol: char,

    /// Symbol drawn for player O.
    #[serde(default = "default_o_symbol")]
    o_symbol: char,
}

#[instrument]
fn default_show_spot_numbers() -> bool {
    true
}

#[instrument]
fn default_x_symbol() -> char {
    'X'
}

#[instrument]
fn default_o_symbol() -> char {
    'O'
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_spot_numbers: default_show_spot_numbers(),
            x_symbol: default_x_symbol(),
            o_symbol: default_o_symbol(),
        }
    }
}

impl AppConfig {
    /// Creates a configuration with the given rules and default display options.
    #[instrument]
    pub fn new(rules: RuleSettings) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            closed_decided_boards = config.rules.closed_decided_boards(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file at `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(*config.rules().closed_decided_boards());
        assert_eq!(*config.display().x_symbol(), 'X');
        assert!(config.log_filter().is_none());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            log_filter = "debug"

            [rules]
            closed_decided_boards = false

            [display]
            o_symbol = "@"
            "#,
        )
        .unwrap();

        assert!(!*config.rules().closed_decided_boards());
        assert_eq!(*config.display().o_symbol(), '@');
        assert_eq!(*config.display().x_symbol(), 'X');
        assert!(*config.display().show_spot_numbers());
        assert_eq!(config.log_filter().as_deref(), Some("debug"));
    }

    #[test]
    fn test_bad_toml_reports_location() {
        let err = AppConfig::from_toml("rules = 3").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
