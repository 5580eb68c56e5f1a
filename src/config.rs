//! Configuration management for the status bot

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::{Result, TrackerError};
use std::path::PathBuf;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chat bot token, required
    pub bot_token: String,

    /// Directory holding one `<elevator>.log` file per elevator
    pub log_dir: PathBuf,

    /// Buttons per row in the elevator menu
    pub menu_columns: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("log_dir", &self.log_dir)
            .field("menu_columns", &self.menu_columns)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            log_dir: PathBuf::from("logs"),
            menu_columns: 2,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(token) = env::var("BOT_TOKEN") {
            config.bot_token = token.trim().to_string();
        }

        if let Ok(log_dir) = env::var("LOG_DIR") {
            if !log_dir.trim().is_empty() {
                config.log_dir = PathBuf::from(log_dir.trim());
            }
        }

        if let Ok(columns) = env::var("MENU_COLUMNS") {
            if let Ok(columns) = columns.parse() {
                config.menu_columns = columns;
            }
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.is_empty() {
            return Err(TrackerError::Config("BOT_TOKEN is not set".to_string()));
        }

        if self.menu_columns == 0 {
            return Err(TrackerError::Config(
                "menu_columns must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_requires_token() {
        let config = Config::default();
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        let err = config.validate().unwrap_err();
        assert!(matches!(&err, TrackerError::Config(msg) if msg == "BOT_TOKEN is not set"));
        assert_eq!(err.to_string(), "Configuration error: BOT_TOKEN is not set");
    }

    #[test]
    fn test_config_with_token_is_valid() {
        let config = Config {
            bot_token: "123:abc".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_menu_columns_rejected() {
        let config = Config {
            bot_token: "123:abc".to_string(),
            menu_columns: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = Config {
            bot_token: "secret-token".to_string(),
            ..Config::default()
        };
        assert!(!format!("{:?}", config).contains("secret-token"));
    }
}
