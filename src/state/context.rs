//! Conversation context management
//! 
//! This module handles user conversation context, tracking the flow and step
//! each user is in, plus the application-wide context shared by handlers.

use std::sync::Arc;
use chrono::{DateTime, Utc};

use crate::Settings;
use crate::database::DatabaseService;
use crate::middleware::RoleResolver;
use crate::services::{InventoryService, ReportService};
use super::scenarios::Flow;
use super::storage::StateStorage;

/// Application-wide context, built once at startup and shared by all handlers
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Arc<Settings>,
    pub database: DatabaseService,
    pub roles: RoleResolver,
    pub state_storage: StateStorage,
    pub inventory: InventoryService,
    pub reports: ReportService,
}

impl AppContext {
    /// Create a new AppContext from settings and an opened database
    pub fn new(settings: Settings, database: DatabaseService) -> Self {
        let roles = RoleResolver::from_config(&settings.bot);
        let inventory = InventoryService::new(database.clone());
        let reports = ReportService::new(database.clone(), settings.export.file_path.clone());

        Self {
            settings: Arc::new(settings),
            database,
            roles,
            state_storage: StateStorage::new(),
            inventory,
            reports,
        }
    }
}

/// User conversation context
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationContext {
    /// User ID this context belongs to
    pub user_id: i64,
    /// Current flow and step, `None` when idle
    pub flow: Option<Flow>,
    /// When the current flow was started
    pub started_at: Option<DateTime<Utc>>,
    /// When this context was last updated
    pub updated_at: DateTime<Utc>,
}

impl ConversationContext {
    /// Create an idle conversation context for a user
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            flow: None,
            started_at: None,
            updated_at: Utc::now(),
        }
    }

    /// Start a flow, discarding anything collected by a previous one
    pub fn start(user_id: i64, flow: Flow) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            flow: Some(flow),
            started_at: Some(now),
            updated_at: now,
        }
    }

    /// Move to the next step of the current flow
    pub fn advance(&mut self, flow: Flow) {
        if self.started_at.is_none() {
            self.started_at = Some(Utc::now());
        }
        self.flow = Some(flow);
        self.updated_at = Utc::now();
    }

    /// Leave the current flow
    pub fn complete(&mut self) {
        self.flow = None;
        self.started_at = None;
        self.updated_at = Utc::now();
    }

    /// Check if the user is outside any flow
    pub fn is_idle(&self) -> bool {
        self.flow.is_none()
    }

    /// Current flow and step names, for logging
    pub fn current_state(&self) -> (Option<&'static str>, Option<&'static str>) {
        match &self.flow {
            Some(flow) => (Some(flow.name()), Some(flow.step_name())),
            None => (None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scenarios::{RegisterStep, MoveStep};

    #[test]
    fn test_new_context() {
        let context = ConversationContext::new(123);
        assert_eq!(context.user_id, 123);
        assert!(context.is_idle());
        assert!(context.started_at.is_none());
        assert_eq!(context.current_state(), (None, None));
    }

    #[test]
    fn test_flow_lifecycle() {
        let mut context = ConversationContext::start(123, Flow::Register(RegisterStep::Code));
        assert!(!context.is_idle());
        assert_eq!(context.current_state(), (Some("register"), Some("code")));

        context.advance(Flow::Register(RegisterStep::Brand { code: "A1".into() }));
        assert_eq!(context.current_state(), (Some("register"), Some("brand")));

        context.complete();
        assert!(context.is_idle());
        assert!(context.started_at.is_none());
    }

    #[test]
    fn test_start_replaces_previous_flow() {
        let mut context = ConversationContext::start(123, Flow::Register(RegisterStep::Code));
        context.advance(Flow::Register(RegisterStep::Brand { code: "A1".into() }));

        let context = ConversationContext::start(context.user_id, Flow::Move(MoveStep::Code));
        assert_eq!(context.flow, Some(Flow::Move(MoveStep::Code)));
    }
}
