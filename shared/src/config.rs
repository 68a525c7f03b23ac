use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    RawData,
    OtGap,
    ProcessedData,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::RawData, Screen::OtGap, Screen::ProcessedData];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::RawData => "Raw Data",
            Screen::OtGap => "Rawdata OT Gap",
            Screen::ProcessedData => "Processed Data",
        }
    }
}

/// Runtime settings. Every field has a default so a partial JSON override
/// is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Fill the tables with demo records on startup
    pub seed_sample_data: bool,
    pub default_screen: Screen,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed_sample_data: true,
            default_screen: Screen::RawData,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unrecognized levels fall back to `Info`
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.level(), log::Level::Info);
        assert!(config.seed_sample_data);
        assert_eq!(config.default_screen, Screen::RawData);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(r#"{"log_level":"debug","default_screen":"processed_data"}"#).unwrap();
        assert_eq!(config.level(), log::Level::Debug);
        assert_eq!(config.default_screen, Screen::ProcessedData);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level(), log::Level::Info);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(AppConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
        assert!(AppConfig::from_json(r#"{"default_screen":"payroll"}"#).is_err());
    }
}
