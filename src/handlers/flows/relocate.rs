//! Box relocation flow

use crate::models::Caller;
use crate::services::Responder;
use crate::state::{AppContext, Flow, MoveStep};
use crate::utils::errors::Result;
use super::{begin, advance, finish};
use super::register::CODE_PROMPT;

pub const LOCATION_PROMPT: &str = "📍 Nueva ubicación:";
pub const MOVED: &str = "✅ Caja movida correctamente";

pub async fn start(ctx: &AppContext, caller: &Caller, out: &dyn Responder) -> Result<()> {
    begin(ctx, caller, Flow::Move(MoveStep::Code), CODE_PROMPT, out).await
}

pub async fn handle_step(
    ctx: &AppContext,
    caller: &Caller,
    step: MoveStep,
    text: &str,
    out: &dyn Responder,
) -> Result<()> {
    match step {
        MoveStep::Code => {
            let next = MoveStep::Location { code: text.to_string() };
            advance(ctx, caller, Flow::Move(next), LOCATION_PROMPT, out).await
        }
        MoveStep::Location { code } => {
            // Confirmed even when the code matched nothing
            ctx.inventory.relocate(caller, &code, text).await?;
            finish(ctx, caller, MOVED, out).await
        }
    }
}
