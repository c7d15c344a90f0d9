//! Configuration validation module
//! 
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{StockBotError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_database_config(&settings.database)?;
    validate_export_config(&settings.export)?;
    validate_logging_config(&settings.logging)?;
    
    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(StockBotError::Config(
            "Bot token is required".to_string()
        ));
    }
    
    if config.admin_ids.is_empty() {
        return Err(StockBotError::Config(
            "At least one admin ID must be configured".to_string()
        ));
    }
    
    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(StockBotError::Config(
            "Database URL is required".to_string()
        ));
    }

    if !config.url.starts_with("sqlite:") {
        return Err(StockBotError::Config(
            format!("Unsupported database URL: {}. Expected a sqlite: URL", config.url)
        ));
    }
    
    if config.max_connections == 0 {
        return Err(StockBotError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }
    
    if config.min_connections > config.max_connections {
        return Err(StockBotError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }
    
    Ok(())
}

/// Validate export configuration
fn validate_export_config(config: &super::ExportConfig) -> Result<()> {
    if config.file_path.is_empty() {
        return Err(StockBotError::Config(
            "Export file path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(StockBotError::Config(
            "Log level is required".to_string()
        ));
    }
    
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(StockBotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }
    
    Ok(())
}
