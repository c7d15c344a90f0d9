//! StockBot Telegram Bot
//!
//! A Telegram bot that lets warehouse staff register, look up, adjust and
//! relocate inventoried boxes. Boxes live in a relational store next to an
//! append-only log of quantity adjustments.

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod database;
pub mod state;
pub mod utils;
pub mod middleware;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{StockBotError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use middleware::RoleResolver;
pub use services::{Responder, TelegramResponder};
pub use state::{AppContext, StateStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
