//! Stock adjustment flow

use tracing::debug;

use crate::models::Caller;
use crate::services::Responder;
use crate::state::{AppContext, AdjustStep, Direction, Flow};
use crate::utils::errors::Result;
use crate::utils::helpers::parse_quantity;
use super::{begin, advance, finish, reprompt};
use super::register::{CODE_PROMPT, QUANTITY_PROMPT, INVALID_QUANTITY};

pub const DIRECTION_PROMPT: &str = "¿Qué deseas hacer?";
pub const UPDATED: &str = "✅ Stock actualizado correctamente";

pub async fn start(ctx: &AppContext, caller: &Caller, out: &dyn Responder) -> Result<()> {
    begin(ctx, caller, Flow::Adjust(AdjustStep::Code), CODE_PROMPT, out).await
}

pub async fn handle_step(
    ctx: &AppContext,
    caller: &Caller,
    step: AdjustStep,
    text: &str,
    out: &dyn Responder,
) -> Result<()> {
    match step {
        AdjustStep::Code => {
            // Unknown codes abort the flow with BoxNotFound
            let stock_box = ctx.inventory.require_box(text).await?;
            let prompt = format!("📦 Stock actual: {}\n{}", stock_box.quantity, DIRECTION_PROMPT);
            let next = AdjustStep::Direction { code: stock_box.code };
            advance(ctx, caller, Flow::Adjust(next), &prompt, out).await
        }
        AdjustStep::Direction { code } => {
            let next = AdjustStep::Amount {
                code,
                direction: Direction::from_label(text),
                label: text.to_string(),
            };
            advance(ctx, caller, Flow::Adjust(next), QUANTITY_PROMPT, out).await
        }
        AdjustStep::Amount { code, direction, label } => {
            let Some(magnitude) = parse_quantity(text) else {
                debug!(user_id = caller.id, input = text, "Rejected adjustment amount");
                return reprompt(INVALID_QUANTITY, out).await;
            };
            let quantity = ctx.inventory.adjust(caller, &code, direction, &label, magnitude).await?;
            finish(ctx, caller, &format!("{}\n🔢 Nuevo stock: {}", UPDATED, quantity), out).await
        }
    }
}
