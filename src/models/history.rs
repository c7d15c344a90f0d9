//! Movement history model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Append-only audit record of a quantity adjustment
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    pub user: String,
    /// Direction label exactly as the user picked it
    pub action: String,
    pub code: String,
    /// Requested magnitude, not the resulting total
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub user: String,
    pub action: String,
    pub code: String,
    pub quantity: i64,
}
