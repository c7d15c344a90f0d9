//! Database repositories module
//! 
//! This module contains all repository implementations for data access

pub mod boxes;
pub mod history;

// Re-export repositories
pub use boxes::BoxRepository;
pub use history::HistoryRepository;
