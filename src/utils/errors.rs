//! Error handling for StockBot
//! 
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for StockBot application
#[derive(Error, Debug)]
pub enum StockBotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    
    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
    
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("Box not found: {code}")]
    BoxNotFound { code: String },

    #[error("Box code already exists: {code}")]
    DuplicateCode { code: String },
}

/// Result type alias for StockBot operations
pub type Result<T> = std::result::Result<T, StockBotError>;

impl StockBotError {
    /// Translate a storage error raised while inserting `code`, turning
    /// unique-constraint violations into [`StockBotError::DuplicateCode`].
    pub fn from_insert(error: sqlx::Error, code: &str) -> Self {
        match &error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                StockBotError::DuplicateCode { code: code.to_string() }
            }
            _ => StockBotError::Database(error),
        }
    }

    /// Check if the error only affects the current flow and can be reported
    /// to the user. Delivery failures cannot be reported back over the same
    /// chat, so they are not recoverable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StockBotError::Database(_) => true,
            StockBotError::Migration(_) => false,
            StockBotError::Telegram(_) => false,
            StockBotError::Spreadsheet(_) => true,
            StockBotError::Io(_) => true,
            StockBotError::Config(_) => false,
            StockBotError::BoxNotFound { .. } => true,
            StockBotError::DuplicateCode { .. } => true,
        }
    }
    
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StockBotError::Migration(_) => ErrorSeverity::Critical,
            StockBotError::Config(_) => ErrorSeverity::Critical,
            StockBotError::BoxNotFound { .. } => ErrorSeverity::Info,
            StockBotError::DuplicateCode { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
