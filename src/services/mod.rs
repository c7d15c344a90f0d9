//! Services module
//!
//! This module contains business logic services

pub mod inventory;
pub mod reports;
pub mod notification;

// Re-export commonly used services
pub use inventory::InventoryService;
pub use reports::{ReportService, ExportFile};
pub use notification::{Responder, TelegramResponder};
