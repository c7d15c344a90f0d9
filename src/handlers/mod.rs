//! Bot handlers module
//! 
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for /start and /help
//! - Message handlers routing text into conversation flows
//! - Menu rendering shared by both

pub mod commands;
pub mod flows;
pub mod menus;
pub mod messages;
pub mod reports;

// Re-export commonly used handler functions
pub use commands::{Command, handle_command, run_command};
pub use messages::{handle_message, handle_text};
pub use menus::{Menu, MenuAction};
