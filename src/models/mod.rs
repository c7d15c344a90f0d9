//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod stock_box;
pub mod history;
pub mod location;
pub mod caller;

// Re-export commonly used models
pub use stock_box::{StockBox, NewStockBox};
pub use history::{HistoryEntry, NewHistoryEntry};
pub use location::LOCATIONS;
pub use caller::Caller;
