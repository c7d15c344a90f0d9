//! Inventory service implementation
//!
//! Business operations behind the conversation flows: registering boxes,
//! looking them up, adjusting quantities and relocating them.

use tracing::{info, debug};

use crate::database::DatabaseService;
use crate::models::{Caller, StockBox, NewStockBox, NewHistoryEntry};
use crate::state::scenarios::{Direction, LookupMode};
use crate::utils::errors::{StockBotError, Result};
use crate::utils::logging::log_user_action;

/// Inventory service for box operations
#[derive(Debug, Clone)]
pub struct InventoryService {
    database: DatabaseService,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(database: DatabaseService) -> Self {
        Self { database }
    }

    /// Register a new box. Fails with [`StockBotError::DuplicateCode`] when the code is taken.
    pub async fn register(&self, caller: &Caller, request: NewStockBox) -> Result<StockBox> {
        debug!(user_id = caller.id, code = %request.code, "Registering box");

        let stock_box = self.database.register_box(request).await?;
        log_user_action(caller.id, "register_box", Some(&stock_box.code), Some(&stock_box.location));
        info!(box_id = stock_box.id, code = %stock_box.code, "Box registered");

        Ok(stock_box)
    }

    /// Find boxes matching `term`.
    ///
    /// Brand lookups are a case-sensitive substring match, code lookups an exact match.
    pub async fn lookup(&self, mode: LookupMode, term: &str) -> Result<Vec<StockBox>> {
        debug!(mode = ?mode, term = term, "Looking up stock");

        match mode {
            LookupMode::Brand => self.database.search_by_brand(term).await,
            LookupMode::Code => Ok(self.database.find_box(term).await?.into_iter().collect()),
        }
    }

    /// Apply an adjustment and record it in the history log.
    ///
    /// `label` is the direction reply exactly as typed and is stored as the
    /// history action. Returns the new quantity.
    pub async fn adjust(
        &self,
        caller: &Caller,
        code: &str,
        direction: Direction,
        label: &str,
        magnitude: i64,
    ) -> Result<i64> {
        let entry = NewHistoryEntry {
            user: caller.display_name(),
            action: label.to_string(),
            code: code.to_string(),
            quantity: magnitude,
        };

        let quantity = self.database.adjust_stock(direction.delta(magnitude), entry).await?;

        let details = format!("{:?} {} -> {}", direction, magnitude, quantity);
        log_user_action(caller.id, "adjust_stock", Some(code), Some(&details));

        Ok(quantity)
    }

    /// Change a box's location. An unknown code is a silent no-op.
    pub async fn relocate(&self, caller: &Caller, code: &str, location: &str) -> Result<bool> {
        let moved = self.database.move_box(code, location).await?;

        if moved {
            log_user_action(caller.id, "move_box", Some(code), Some(location));
        } else {
            debug!(user_id = caller.id, code = code, "Move targeted an unknown box");
        }

        Ok(moved)
    }

    /// Fail with [`StockBotError::BoxNotFound`] unless a box with `code` exists
    pub async fn require_box(&self, code: &str) -> Result<StockBox> {
        self.database
            .find_box(code)
            .await?
            .ok_or_else(|| StockBotError::BoxNotFound { code: code.to_string() })
    }
}
