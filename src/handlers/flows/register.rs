//! Box registration flow

use tracing::debug;

use crate::models::{Caller, NewStockBox};
use crate::services::Responder;
use crate::state::{AppContext, Flow, RegisterStep};
use crate::utils::errors::Result;
use crate::utils::helpers::parse_quantity;
use super::{begin, advance, finish, reprompt};

pub const CODE_PROMPT: &str = "📦 Código de la caja:";
pub const BRAND_PROMPT: &str = "🏷 Marca:";
pub const COLOR_PROMPT: &str = "🎨 Color (código):";
pub const QUANTITY_PROMPT: &str = "🔢 Cantidad:";
pub const LOCATION_PROMPT: &str = "📍 Ubicación:";
pub const INVALID_QUANTITY: &str = "❌ La cantidad debe ser un número entero. Intenta de nuevo:";
pub const REGISTERED: &str = "✅ Caja registrada correctamente";

pub async fn start(ctx: &AppContext, caller: &Caller, out: &dyn Responder) -> Result<()> {
    begin(ctx, caller, Flow::Register(RegisterStep::Code), CODE_PROMPT, out).await
}

pub async fn handle_step(
    ctx: &AppContext,
    caller: &Caller,
    step: RegisterStep,
    text: &str,
    out: &dyn Responder,
) -> Result<()> {
    match step {
        RegisterStep::Code => {
            let next = RegisterStep::Brand { code: text.to_string() };
            advance(ctx, caller, Flow::Register(next), BRAND_PROMPT, out).await
        }
        RegisterStep::Brand { code } => {
            let next = RegisterStep::Color { code, brand: text.to_string() };
            advance(ctx, caller, Flow::Register(next), COLOR_PROMPT, out).await
        }
        RegisterStep::Color { code, brand } => {
            let next = RegisterStep::Quantity { code, brand, color: text.to_string() };
            advance(ctx, caller, Flow::Register(next), QUANTITY_PROMPT, out).await
        }
        RegisterStep::Quantity { code, brand, color } => {
            let Some(quantity) = parse_quantity(text) else {
                debug!(user_id = caller.id, input = text, "Rejected box quantity");
                return reprompt(INVALID_QUANTITY, out).await;
            };
            let next = RegisterStep::Location { code, brand, color, quantity };
            advance(ctx, caller, Flow::Register(next), LOCATION_PROMPT, out).await
        }
        RegisterStep::Location { code, brand, color, quantity } => {
            // Any text is accepted; the picker only offers the usual shelves
            let request = NewStockBox {
                code,
                brand,
                color,
                quantity,
                location: text.to_string(),
            };
            ctx.inventory.register(caller, request).await?;
            finish(ctx, caller, REGISTERED, out).await
        }
    }
}
