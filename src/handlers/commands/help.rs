//! Help command handler

use crate::models::Caller;
use crate::services::Responder;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::handlers::menus::{main_menu, MenuAction};
use crate::handlers::messages::can_start;

/// Help text listing the actions `caller` may start
pub fn help_text(ctx: &AppContext, caller: &Caller) -> String {
    let role = ctx.roles.role_of(caller.id);
    let mut text = String::from("🤖 Ayuda\n\n/start - Mostrar el menú principal\n/help - Mostrar esta ayuda\n\nAcciones disponibles:\n");

    for action in MenuAction::ALL.into_iter().filter(|action| can_start(role, *action)) {
        text.push_str(action.label());
        text.push('\n');
    }
    text
}

/// Handle /help command
pub async fn handle_help(ctx: &AppContext, caller: &Caller, out: &dyn Responder) -> Result<()> {
    let text = help_text(ctx, caller);
    out.send_text(&text, Some(main_menu(ctx.roles.role_of(caller.id)))).await
}
