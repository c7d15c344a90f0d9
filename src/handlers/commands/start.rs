//! Start command handler
//!
//! Handles the /start command: drops any flow in progress and shows the main menu

use tracing::info;

use crate::models::Caller;
use crate::services::Responder;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::handlers::menus::main_menu;

pub const WELCOME: &str = "📦 Sistema de Stock de Cajas";

/// Handle /start command
pub async fn handle_start(ctx: &AppContext, caller: &Caller, out: &dyn Responder) -> Result<()> {
    ctx.state_storage.delete_context(caller.id).await;

    let role = ctx.roles.role_of(caller.id);
    info!(user_id = caller.id, role = ?role, "User started bot");

    out.send_text(WELCOME, Some(main_menu(role))).await
}
