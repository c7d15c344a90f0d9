//! Logging configuration and setup
//! 
//! This module provides logging initialization and structured logging utilities
//! for the StockBot application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{StockBotError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, "stock_bot.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| StockBotError::Config(format!("Failed to initialize logging: {}", e)))?;
        
    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, code: Option<&str>, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        code = code,
        details = details,
        "User action performed"
    );
}

/// Log admin-only actions
pub fn log_admin_action(admin_id: i64, action: &str, details: Option<&str>) {
    info!(
        admin_id = admin_id,
        action = action,
        details = details,
        "Admin action performed"
    );
}

/// Log a gated action attempted by a caller without the required role
pub fn log_unauthorized_attempt(user_id: i64, action: &str) {
    warn!(
        user_id = user_id,
        action = action,
        "Unauthorized action ignored"
    );
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation completed"
        );
    } else {
        error!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation failed"
        );
    }
}
