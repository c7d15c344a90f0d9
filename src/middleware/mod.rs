//! Middleware module
//! 
//! This module contains middleware for request processing

pub mod auth;

// Re-export commonly used middleware
pub use auth::{Role, RoleResolver};
