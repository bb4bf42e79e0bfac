//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_board::{Marker, validate_markers};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One side of the table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name.
    name: String,

    /// Marker stamped on this seat's cells.
    marker: Marker,

    /// Whether the minimax agent plays this seat.
    #[serde(default)]
    computer: bool,
}

impl SeatConfig {
    /// Creates a seat configuration.
    pub fn new(name: impl Into<String>, marker: Marker, computer: bool) -> Self {
        Self {
            name: name.into(),
            marker,
            computer,
        }
    }
}

/// Configuration for a match between two seats.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seat 1.
    #[serde(default = "default_first_seat")]
    first: SeatConfig,

    /// Seat 2.
    #[serde(default = "default_second_seat")]
    second: SeatConfig,

    /// Pause before a computer seat answers, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,
}

#[instrument]
fn default_first_seat() -> SeatConfig {
    SeatConfig::new("Nadya", Marker::o(), false)
}

#[instrument]
fn default_second_seat() -> SeatConfig {
    SeatConfig::new("DOM", Marker::x(), true)
}

#[instrument]
fn default_thinking_delay_ms() -> u64 {
    1500
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first: default_first_seat(),
            second: default_second_seat(),
            thinking_delay_ms: default_thinking_delay_ms(),
        }
    }
}

impl MatchConfig {
    /// Creates a configuration from two seats with the default delay.
    #[instrument(skip(first, second))]
    pub fn new(first: SeatConfig, second: SeatConfig) -> Self {
        Self {
            first,
            second,
            thinking_delay_ms: default_thinking_delay_ms(),
        }
    }

    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            first = %config.first.name,
            second = %config.second.name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects seats that share a marker.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_markers(&self.first.marker, &self.second.marker)
            .map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Overrides the thinking delay.
    pub fn with_thinking_delay_ms(mut self, delay_ms: u64) -> Self {
        self.thinking_delay_ms = delay_ms;
        self
    }

    /// Both seats in table order.
    pub fn seats(&self) -> [&SeatConfig; 2] {
        [&self.first, &self.second]
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
    fn test_default_seats() {
        let config = MatchConfig::default();
        assert_eq!(config.first().name(), "Nadya");
        assert_eq!(config.first().marker(), &Marker::o());
        assert!(!config.first().computer());
        assert_eq!(config.second().name(), "DOM");
        assert!(*config.second().computer());
        assert_eq!(*config.thinking_delay_ms(), 1500);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = MatchConfig::from_toml("thinking_delay_ms = 0").unwrap();
        assert_eq!(*config.thinking_delay_ms(), 0);
        assert_eq!(config.second().marker(), &Marker::x());
    }

    #[test]
    fn test_duplicate_markers_rejected() {
        let toml = r#"
            [first]
            name = "A"
            marker = "X"

            [second]
            name = "B"
            marker = "X"
        "#;
        let err = MatchConfig::from_toml(toml).unwrap_err();
        assert!(err.message.contains("must differ"));
    }

    #[test]
    fn test_empty_marker_rejected() {
        let toml = r#"
            [first]
            name = "A"
            marker = ""
        "#;
        assert!(MatchConfig::from_toml(toml).is_err());
    }
}
