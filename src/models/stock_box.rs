//! Stock box model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A physical inventoried box
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StockBox {
    pub id: i64,
    pub code: String,
    pub brand: String,
    pub color: String,
    /// Not clamped at zero: subtracting more than is on hand leaves a negative value
    pub quantity: i64,
    pub location: String,
    /// Last registration or quantity write; relocations leave it untouched
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewStockBox {
    pub code: String,
    pub brand: String,
    pub color: String,
    pub quantity: i64,
    pub location: String,
}
