//! Message handlers module
//!
//! Routes incoming text either to the flow the user is in or, when idle, to
//! the main menu action it names.

use std::sync::Arc;
use teloxide::{Bot, types::Message};
use tracing::{debug, info, warn, error};

use crate::models::Caller;
use crate::middleware::Role;
use crate::services::{Responder, TelegramResponder};
use crate::state::{AppContext, ConversationContext, Flow};
use crate::utils::errors::{ErrorSeverity, StockBotError, Result};
use crate::utils::logging::log_unauthorized_attempt;
use super::flows::{register, lookup, adjust, relocate};
use super::menus::{main_menu, MenuAction};
use super::reports;

pub const BOX_NOT_FOUND: &str = "❌ Caja no encontrada";
pub const OPERATION_FAILED: &str = "⚠️ No se pudo completar la operación. Intenta de nuevo.";

/// Handle incoming text messages
pub async fn handle_message(bot: Bot, msg: Message, ctx: Arc<AppContext>) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        debug!(chat_id = ?msg.chat.id, "Ignoring message without sender");
        return Ok(());
    };
    let Some(text) = msg.text() else {
        debug!(chat_id = ?msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    let caller = Caller::new(user.id.0 as i64, user.username.clone());
    let responder = TelegramResponder::new(bot, msg.chat.id);

    handle_text(&ctx, &caller, text, &responder).await
}

/// Process one text message from `caller`.
///
/// Recoverable failures end the caller's current flow and are reported to
/// them; the bot keeps serving everyone else. Delivery errors propagate.
pub async fn handle_text(ctx: &AppContext, caller: &Caller, text: &str, out: &dyn Responder) -> Result<()> {
    let result = match ctx.state_storage.load_context(caller.id).await {
        Some(context) if !context.is_idle() => handle_conversation_message(ctx, caller, context, text, out).await,
        _ => handle_menu_selection(ctx, caller, text, out).await,
    };

    match result {
        Err(e) if e.is_recoverable() => recover(ctx, caller, e, out).await,
        other => other,
    }
}

/// Handle a message sent while a flow is active. Menu labels count as plain input here.
async fn handle_conversation_message(
    ctx: &AppContext,
    caller: &Caller,
    context: ConversationContext,
    text: &str,
    out: &dyn Responder,
) -> Result<()> {
    let (flow_name, step_name) = context.current_state();
    debug!(user_id = caller.id, flow = ?flow_name, step = ?step_name, "Handling flow input");

    match context.flow {
        Some(Flow::Register(step)) => register::handle_step(ctx, caller, step, text, out).await,
        Some(Flow::Lookup(step)) => lookup::handle_step(ctx, caller, step, text, out).await,
        Some(Flow::Adjust(step)) => adjust::handle_step(ctx, caller, step, text, out).await,
        Some(Flow::Move(step)) => relocate::handle_step(ctx, caller, step, text, out).await,
        None => Ok(()),
    }
}

/// Handle a message sent while idle
async fn handle_menu_selection(ctx: &AppContext, caller: &Caller, text: &str, out: &dyn Responder) -> Result<()> {
    let Some(action) = MenuAction::from_label(text) else {
        debug!(user_id = caller.id, "Ignoring unrecognized idle message");
        return Ok(());
    };

    if !can_start(ctx.roles.role_of(caller.id), action) {
        log_unauthorized_attempt(caller.id, action.label());
        return Ok(());
    }

    info!(user_id = caller.id, action = ?action, "Menu action selected");

    match action {
        MenuAction::Register => register::start(ctx, caller, out).await,
        MenuAction::ViewStock => lookup::start(ctx, caller, out).await,
        MenuAction::Adjust => adjust::start(ctx, caller, out).await,
        MenuAction::Move => relocate::start(ctx, caller, out).await,
        MenuAction::Export => reports::send_export(ctx, caller, out).await,
        MenuAction::History => reports::send_history(ctx, caller, out).await,
    }
}

/// End the caller's flow after a failed operation and tell them about it
async fn recover(ctx: &AppContext, caller: &Caller, error: StockBotError, out: &dyn Responder) -> Result<()> {
    ctx.state_storage.delete_context(caller.id).await;

    let text = match &error {
        StockBotError::DuplicateCode { code } => format!("❌ Ya existe una caja con el código {}", code),
        StockBotError::BoxNotFound { .. } => BOX_NOT_FOUND.to_string(),
        _ => OPERATION_FAILED.to_string(),
    };

    match error.severity() {
        ErrorSeverity::Info => info!(user_id = caller.id, error = %error, "Flow ended"),
        ErrorSeverity::Warning => warn!(user_id = caller.id, error = %error, "Flow aborted"),
        ErrorSeverity::Error | ErrorSeverity::Critical => error!(user_id = caller.id, error = %error, "Flow failed"),
    }

    out.send_text(&text, Some(main_menu(ctx.roles.role_of(caller.id)))).await
}

/// Whether `role` may start `action` from the main menu
pub fn can_start(role: Role, action: MenuAction) -> bool {
    role >= action.required_role()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_start() {
        assert!(can_start(Role::User, MenuAction::ViewStock));
        assert!(can_start(Role::User, MenuAction::Move));
        assert!(!can_start(Role::User, MenuAction::Adjust));
        assert!(can_start(Role::Operator, MenuAction::Adjust));
        assert!(!can_start(Role::Operator, MenuAction::Register));
        assert!(!can_start(Role::Operator, MenuAction::History));
        assert!(can_start(Role::Admin, MenuAction::Export));
    }
}
