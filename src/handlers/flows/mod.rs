//! Conversation flows
//!
//! One module per multi-step flow. Each exposes `start`, called from the main
//! menu, and `handle_step`, called with the step the user is currently in.

pub mod register;
pub mod lookup;
pub mod adjust;
pub mod relocate;

use crate::models::Caller;
use crate::services::Responder;
use crate::state::{AppContext, ConversationContext, Flow};
use crate::utils::errors::Result;
use super::menus::{main_menu, menu_for};

/// Enter `flow` from idle, discarding anything a previous flow collected
pub(crate) async fn begin(
    ctx: &AppContext,
    caller: &Caller,
    flow: Flow,
    prompt: &str,
    out: &dyn Responder,
) -> Result<()> {
    let menu = menu_for(ctx.roles.role_of(caller.id), Some(&flow));
    let context = ConversationContext::start(caller.id, flow);
    ctx.state_storage.save_context(&context).await;
    out.send_text(prompt, menu).await
}

/// Move the current flow on to its next step and prompt for it
pub(crate) async fn advance(
    ctx: &AppContext,
    caller: &Caller,
    flow: Flow,
    prompt: &str,
    out: &dyn Responder,
) -> Result<()> {
    let menu = menu_for(ctx.roles.role_of(caller.id), Some(&flow));
    let mut context = ctx
        .state_storage
        .load_context(caller.id)
        .await
        .unwrap_or_else(|| ConversationContext::new(caller.id));
    context.advance(flow);
    ctx.state_storage.save_context(&context).await;
    out.send_text(prompt, menu).await
}

/// Leave the current flow and reply with the main menu
pub(crate) async fn finish(
    ctx: &AppContext,
    caller: &Caller,
    text: &str,
    out: &dyn Responder,
) -> Result<()> {
    if let Some(mut context) = ctx.state_storage.load_context(caller.id).await {
        context.complete();
        ctx.state_storage.save_context(&context).await;
    }
    out.send_text(text, Some(main_menu(ctx.roles.role_of(caller.id)))).await
}

/// Reply without changing state, used when input for the current step is rejected
pub(crate) async fn reprompt(text: &str, out: &dyn Responder) -> Result<()> {
    out.send_text(text, None).await
}
