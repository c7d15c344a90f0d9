//! Menu rendering
//! 
//! Reply keyboards offered to the user. Everything here is a pure function of
//! the caller's role and the conversation state.

use crate::middleware::Role;
use crate::models::LOCATIONS;
use crate::state::scenarios::{
    Flow, RegisterStep, LookupStep, AdjustStep, MoveStep,
    ADD_LABEL, SUBTRACT_LABEL, BY_BRAND_LABEL, BY_CODE_LABEL, BACK_LABEL,
};

pub const REGISTER_LABEL: &str = "➕ Registrar caja";
pub const VIEW_STOCK_LABEL: &str = "🔍 Ver stock";
pub const ADJUST_LABEL: &str = "➖➕ Ajustar stock";
pub const MOVE_LABEL: &str = "🔁 Mover cajas";
pub const EXPORT_LABEL: &str = "📊 Exportar Excel";
pub const HISTORY_LABEL: &str = "📜 Ver historial";

/// Ordered list of selectable labels, one per keyboard row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    labels: Vec<String>,
}

impl Menu {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { labels: labels.into_iter().map(Into::into).collect() }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Actions reachable from the main menu while idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Register,
    ViewStock,
    Adjust,
    Move,
    Export,
    History,
}

impl MenuAction {
    /// Main menu order for admins; non-admins see the same order minus admin actions
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Register,
        MenuAction::ViewStock,
        MenuAction::Adjust,
        MenuAction::Move,
        MenuAction::Export,
        MenuAction::History,
    ];

    /// Match an exact main-menu label
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == text)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Register => REGISTER_LABEL,
            MenuAction::ViewStock => VIEW_STOCK_LABEL,
            MenuAction::Adjust => ADJUST_LABEL,
            MenuAction::Move => MOVE_LABEL,
            MenuAction::Export => EXPORT_LABEL,
            MenuAction::History => HISTORY_LABEL,
        }
    }

    /// Whether the action is listed in the main menu for `role`
    pub fn is_listed_for(self, role: Role) -> bool {
        match self {
            MenuAction::Register | MenuAction::Export | MenuAction::History => role == Role::Admin,
            MenuAction::ViewStock | MenuAction::Adjust | MenuAction::Move => true,
        }
    }

    /// Minimum role allowed to start the action.
    ///
    /// Adjust is listed for everyone but only operators may start it.
    pub fn required_role(self) -> Role {
        match self {
            MenuAction::Register | MenuAction::Export | MenuAction::History => Role::Admin,
            MenuAction::Adjust => Role::Operator,
            MenuAction::ViewStock | MenuAction::Move => Role::User,
        }
    }
}

/// Idle main menu; admin-only actions are shown to admins only
pub fn main_menu(role: Role) -> Menu {
    Menu::new(
        MenuAction::ALL
            .into_iter()
            .filter(|action| action.is_listed_for(role))
            .map(MenuAction::label),
    )
}

/// The fixed shelf location picker
pub fn location_menu() -> Menu {
    Menu::new(LOCATIONS)
}

/// Stock lookup filter picker
pub fn lookup_filter_menu() -> Menu {
    Menu::new([BY_BRAND_LABEL, BY_CODE_LABEL, BACK_LABEL])
}

/// Adjustment direction picker
pub fn direction_menu() -> Menu {
    Menu::new([ADD_LABEL, SUBTRACT_LABEL])
}

/// Keyboard that accompanies the prompt for the given state.
///
/// `None` means the step expects free text and the previous keyboard stays.
pub fn menu_for(role: Role, flow: Option<&Flow>) -> Option<Menu> {
    match flow {
        None => Some(main_menu(role)),
        Some(Flow::Register(RegisterStep::Location { .. })) => Some(location_menu()),
        Some(Flow::Move(MoveStep::Location { .. })) => Some(location_menu()),
        Some(Flow::Lookup(LookupStep::Mode)) => Some(lookup_filter_menu()),
        Some(Flow::Adjust(AdjustStep::Direction { .. })) => Some(direction_menu()),
        Some(_) => None,
    }
}
