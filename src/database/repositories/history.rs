//! History repository implementation

use sqlx::{SqliteConnection, SqlitePool};
use chrono::Utc;
use crate::models::history::{HistoryEntry, NewHistoryEntry};
use crate::utils::errors::StockBotError;

#[derive(Clone)]
#[derive(Debug)]
pub struct HistoryRepository {
    pool: SqlitePool,
}

impl HistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append an entry on the given connection, normally inside the
    /// transaction that applied the adjustment
    pub async fn create(
        &self,
        conn: &mut SqliteConnection,
        request: NewHistoryEntry,
    ) -> Result<HistoryEntry, StockBotError> {
        let entry = sqlx::query_as::<_, HistoryEntry>(
            r#"
            INSERT INTO history (user, action, code, quantity, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, user, action, code, quantity, created_at
            "#
        )
        .bind(request.user)
        .bind(request.action)
        .bind(request.code)
        .bind(request.quantity)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await?;

        Ok(entry)
    }

    /// Full history, newest first
    pub async fn list_recent_first(&self) -> Result<Vec<HistoryEntry>, StockBotError> {
        let entries = sqlx::query_as::<_, HistoryEntry>(
            "SELECT id, user, action, code, quantity, created_at FROM history ORDER BY created_at DESC, id DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
