//! Application settings management
//! 
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub database: DatabaseConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    pub admin_ids: Vec<i64>,
    /// Warehouse operators allowed to adjust stock. Admins are implicitly operators.
    #[serde(default)]
    pub operator_ids: Vec<i64>,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Spreadsheet export configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Fixed path of the exported workbook, overwritten on every export
    pub file_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
}

impl Settings {
    /// Load settings from defaults, the optional `config.toml` and `STOCKBOT_*` environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("bot.admin_ids", Vec::<i64>::new())?
            .set_default("bot.operator_ids", Vec::<i64>::new())?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", defaults.database.max_connections)?
            .set_default("database.min_connections", defaults.database.min_connections)?
            .set_default("export.file_path", defaults.export.file_path)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.directory", defaults.logging.directory)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("STOCKBOT")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("bot.admin_ids")
                    .with_list_parse_key("bot.operator_ids")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::StockBotError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                admin_ids: vec![],
                operator_ids: vec![],
            },
            database: DatabaseConfig {
                url: "sqlite://stock.db?mode=rwc".to_string(),
                max_connections: 5,
                min_connections: 1,
            },
            export: ExportConfig {
                file_path: "stock.xlsx".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: "logs".to_string(),
            },
        }
    }
}
