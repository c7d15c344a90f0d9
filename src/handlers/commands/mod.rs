//! Command handlers module
//! 
//! This module contains handlers for the bot commands /start and /help.

pub mod start;
pub mod help;

use std::sync::Arc;
use teloxide::{Bot, types::Message, utils::command::BotCommands};
use tracing::debug;

use crate::models::Caller;
use crate::services::{Responder, TelegramResponder};
use crate::state::AppContext;
use crate::utils::errors::Result;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Comandos disponibles:")]
pub enum Command {
    #[command(description = "Mostrar el menú principal")]
    Start,
    #[command(description = "Mostrar las acciones disponibles")]
    Help,
}

/// Main command dispatcher
pub async fn handle_command(bot: Bot, msg: Message, cmd: Command, ctx: Arc<AppContext>) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        debug!(chat_id = ?msg.chat.id, "Ignoring command without sender");
        return Ok(());
    };

    let caller = Caller::new(user.id.0 as i64, user.username.clone());
    let responder = TelegramResponder::new(bot, msg.chat.id);

    run_command(&ctx, &caller, cmd, &responder).await
}

/// Execute a parsed command for `caller`
pub async fn run_command(ctx: &AppContext, caller: &Caller, cmd: Command, out: &dyn Responder) -> Result<()> {
    debug!(user_id = caller.id, command = ?cmd, "Processing command");

    match cmd {
        Command::Start => start::handle_start(ctx, caller, out).await,
        Command::Help => help::handle_help(ctx, caller, out).await,
    }
}
