//! Role resolution
//! 
//! Classifies callers as admin, warehouse operator or plain user from the
//! static id lists in the bot configuration.

use std::collections::HashSet;
use tracing::debug;
use crate::config::settings::BotConfig;

/// Caller role, from least to most privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    User,
    Operator,
    Admin,
}

/// Resolves caller roles from configured id sets
#[derive(Debug, Clone)]
pub struct RoleResolver {
    admin_ids: HashSet<i64>,
    operator_ids: HashSet<i64>,
}

impl RoleResolver {
    /// Create a new RoleResolver from explicit id lists
    pub fn new(admin_ids: impl IntoIterator<Item = i64>, operator_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            admin_ids: admin_ids.into_iter().collect(),
            operator_ids: operator_ids.into_iter().collect(),
        }
    }

    /// Build from the bot section of the settings
    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(config.admin_ids.iter().copied(), config.operator_ids.iter().copied())
    }

    /// Check if user is an admin
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }

    /// Check if user may adjust stock. Admins always can.
    pub fn is_operator(&self, user_id: i64) -> bool {
        self.operator_ids.contains(&user_id) || self.is_admin(user_id)
    }

    /// Highest role held by the user
    pub fn role_of(&self, user_id: i64) -> Role {
        let role = if self.is_admin(user_id) {
            Role::Admin
        } else if self.is_operator(user_id) {
            Role::Operator
        } else {
            Role::User
        };
        debug!(user_id = user_id, role = ?role, "Resolved caller role");
        role
    }
}
