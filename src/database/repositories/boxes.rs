//! Box repository implementation

use sqlx::{SqliteConnection, SqlitePool};
use chrono::Utc;
use crate::models::stock_box::{StockBox, NewStockBox};
use crate::utils::errors::StockBotError;

const BOX_COLUMNS: &str = "id, code, brand, color, quantity, location, updated_at";

#[derive(Clone)]
#[derive(Debug)]
pub struct BoxRepository {
    pool: SqlitePool,
}

impl BoxRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new box. A code that is already registered fails with
    /// [`StockBotError::DuplicateCode`] and leaves the stored row untouched.
    pub async fn create(&self, request: NewStockBox) -> Result<StockBox, StockBotError> {
        let code = request.code.clone();
        let stock_box = sqlx::query_as::<_, StockBox>(&format!(
            r#"
            INSERT INTO boxes (code, brand, color, quantity, location, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING {BOX_COLUMNS}
            "#
        ))
        .bind(request.code)
        .bind(request.brand)
        .bind(request.color)
        .bind(request.quantity)
        .bind(request.location)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StockBotError::from_insert(e, &code))?;

        Ok(stock_box)
    }

    /// Find box by its exact code
    pub async fn find_by_code(&self, code: &str) -> Result<Option<StockBox>, StockBotError> {
        let stock_box = sqlx::query_as::<_, StockBox>(&format!(
            "SELECT {BOX_COLUMNS} FROM boxes WHERE code = ?1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(stock_box)
    }

    /// Find boxes whose brand contains `term` (case-sensitive), in storage order
    pub async fn find_by_brand_substring(&self, term: &str) -> Result<Vec<StockBox>, StockBotError> {
        let boxes = sqlx::query_as::<_, StockBox>(&format!(
            "SELECT {BOX_COLUMNS} FROM boxes WHERE instr(brand, ?1) > 0 ORDER BY id"
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(boxes)
    }

    /// List every box in storage order
    pub async fn list_all(&self) -> Result<Vec<StockBox>, StockBotError> {
        let boxes = sqlx::query_as::<_, StockBox>(&format!(
            "SELECT {BOX_COLUMNS} FROM boxes ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(boxes)
    }

    /// Apply `delta` to the stored quantity in one statement.
    ///
    /// Returns the new quantity, or `None` when no box has this code.
    pub async fn adjust_quantity(
        &self,
        conn: &mut SqliteConnection,
        code: &str,
        delta: i64,
    ) -> Result<Option<i64>, StockBotError> {
        let quantity: Option<(i64,)> = sqlx::query_as(
            r#"
            UPDATE boxes
            SET quantity = quantity + ?1,
                updated_at = ?2
            WHERE code = ?3
            RETURNING quantity
            "#
        )
        .bind(delta)
        .bind(Utc::now())
        .bind(code)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(quantity.map(|(q,)| q))
    }

    /// Set the location of a box. Returns the number of rows touched, which is
    /// zero for an unknown code.
    pub async fn update_location(&self, code: &str, location: &str) -> Result<u64, StockBotError> {
        let result = sqlx::query("UPDATE boxes SET location = ?1 WHERE code = ?2")
            .bind(location)
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
