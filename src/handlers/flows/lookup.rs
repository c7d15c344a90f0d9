//! Stock lookup flow

use crate::models::Caller;
use crate::services::{Responder, ReportService};
use crate::state::{AppContext, Flow, LookupMode, LookupStep};
use crate::state::scenarios::BACK_LABEL;
use crate::utils::errors::Result;
use crate::utils::helpers::{chunk_text, MESSAGE_CHUNK_SIZE};
use crate::handlers::menus::main_menu;
use super::{begin, advance, finish};

pub const MODE_PROMPT: &str = "¿Cómo deseas buscar el stock?";
pub const TERM_PROMPT: &str = "✏️ Escribe el valor a buscar:";
pub const NOTHING_FOUND: &str = "❌ No se encontró stock.";
pub const BACK_TO_MENU: &str = "Menú principal";

pub async fn start(ctx: &AppContext, caller: &Caller, out: &dyn Responder) -> Result<()> {
    begin(ctx, caller, Flow::Lookup(LookupStep::Mode), MODE_PROMPT, out).await
}

pub async fn handle_step(
    ctx: &AppContext,
    caller: &Caller,
    step: LookupStep,
    text: &str,
    out: &dyn Responder,
) -> Result<()> {
    match step {
        LookupStep::Mode if text == BACK_LABEL => finish(ctx, caller, BACK_TO_MENU, out).await,
        LookupStep::Mode => {
            let next = LookupStep::Term { mode: LookupMode::from_label(text) };
            advance(ctx, caller, Flow::Lookup(next), TERM_PROMPT, out).await
        }
        LookupStep::Term { mode } => {
            let boxes = ctx.inventory.lookup(mode, text).await?;
            if boxes.is_empty() {
                return finish(ctx, caller, NOTHING_FOUND, out).await;
            }

            ctx.state_storage.delete_context(caller.id).await;
            let menu = main_menu(ctx.roles.role_of(caller.id));
            let report = ReportService::render_boxes(&boxes);
            for chunk in chunk_text(&report, MESSAGE_CHUNK_SIZE) {
                out.send_text(&chunk, Some(menu.clone())).await?;
            }
            Ok(())
        }
    }
}
