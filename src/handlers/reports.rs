//! Admin reports: movement history and spreadsheet export

use tracing::info;

use crate::models::Caller;
use crate::services::Responder;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::{chunk_text, MESSAGE_CHUNK_SIZE};
use crate::utils::logging::log_admin_action;
use super::menus::main_menu;

pub const NO_HISTORY: &str = "📜 No hay movimientos registrados.";

/// Send the full history, split into messages that fit the platform limit
pub async fn send_history(ctx: &AppContext, caller: &Caller, out: &dyn Responder) -> Result<()> {
    let menu = main_menu(ctx.roles.role_of(caller.id));

    let Some(report) = ctx.reports.history_report().await? else {
        return out.send_text(NO_HISTORY, Some(menu)).await;
    };

    let chunks = chunk_text(&report, MESSAGE_CHUNK_SIZE);
    log_admin_action(caller.id, "view_history", Some(&format!("{} messages", chunks.len())));

    for chunk in &chunks {
        out.send_text(chunk, Some(menu.clone())).await?;
    }
    Ok(())
}

/// Generate the inventory spreadsheet and send it as a document
pub async fn send_export(ctx: &AppContext, caller: &Caller, out: &dyn Responder) -> Result<()> {
    let export = ctx.reports.export_spreadsheet().await?;
    log_admin_action(caller.id, "export_spreadsheet", Some(&export.file_name));
    info!(user_id = caller.id, size = export.bytes.len(), "Sending spreadsheet export");

    let menu = main_menu(ctx.roles.role_of(caller.id));
    out.send_document(&export.file_name, export.bytes, Some(menu)).await
}
