//! State storage implementation
//! 
//! Conversation contexts are kept in memory, keyed by user id. They are
//! transient by nature and do not survive a restart.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use super::context::ConversationContext;

/// In-memory per-user conversation state
#[derive(Debug, Clone, Default)]
pub struct StateStorage {
    contexts: Arc<RwLock<HashMap<i64, ConversationContext>>>,
}

impl StateStorage {
    /// Create an empty state storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Save conversation context. Idle contexts are dropped instead of stored.
    pub async fn save_context(&self, context: &ConversationContext) {
        if context.is_idle() {
            self.delete_context(context.user_id).await;
            return;
        }

        let (flow, step) = context.current_state();
        debug!(user_id = context.user_id, flow = ?flow, step = ?step, "Saving context");
        self.contexts.write().await.insert(context.user_id, context.clone());
    }

    /// Load conversation context, `None` when the user is idle
    pub async fn load_context(&self, user_id: i64) -> Option<ConversationContext> {
        self.contexts.read().await.get(&user_id).cloned()
    }

    /// Delete conversation context
    pub async fn delete_context(&self, user_id: i64) {
        if self.contexts.write().await.remove(&user_id).is_some() {
            debug!(user_id = user_id, "Deleted context");
        }
    }
}
