//! State management module
//! 
//! This module handles conversation state and the application context

pub mod context;
pub mod scenarios;
pub mod storage;

// Re-export commonly used state components
pub use context::{AppContext, ConversationContext};
pub use scenarios::{Flow, RegisterStep, LookupStep, AdjustStep, MoveStep, LookupMode, Direction};
pub use storage::StateStorage;
