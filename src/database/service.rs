//! Database service layer
//! 
//! This module provides a high-level interface to database operations

use std::time::Instant;
use crate::database::{DatabasePool, BoxRepository, HistoryRepository};
use crate::models::*;
use crate::utils::errors::StockBotError;
use crate::utils::logging::log_database_operation;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub boxes: BoxRepository,
    pub history: HistoryRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            boxes: BoxRepository::new(pool.clone()),
            history: HistoryRepository::new(pool.clone()),
            pool,
        }
    }

    /// Register a new box
    pub async fn register_box(&self, request: NewStockBox) -> Result<StockBox, StockBotError> {
        let started = Instant::now();
        let result = self.boxes.create(request).await;
        log_database_operation("insert", "boxes", started.elapsed().as_millis() as u64, result.is_ok());
        result
    }

    /// Apply a quantity change and record it in the history log.
    ///
    /// `delta` is the signed change applied to the stored quantity while
    /// `entry.quantity` keeps the magnitude the user typed. Both writes share
    /// one transaction, so an entry exists exactly when the quantity changed.
    pub async fn adjust_stock(&self, delta: i64, entry: NewHistoryEntry) -> Result<i64, StockBotError> {
        let started = Instant::now();
        let code = entry.code.clone();
        let mut tx = self.pool.begin().await?;

        let new_quantity = match self.boxes.adjust_quantity(&mut tx, &code, delta).await? {
            Some(quantity) => quantity,
            None => {
                tx.rollback().await?;
                return Err(StockBotError::BoxNotFound { code });
            }
        };

        self.history.create(&mut tx, entry).await?;
        tx.commit().await?;

        log_database_operation("adjust", "boxes", started.elapsed().as_millis() as u64, true);
        Ok(new_quantity)
    }

    /// Move a box. Unknown codes are not an error; the returned flag tells
    /// whether a row was touched.
    pub async fn move_box(&self, code: &str, location: &str) -> Result<bool, StockBotError> {
        let updated = self.boxes.update_location(code, location).await?;
        Ok(updated > 0)
    }

    /// Look up a single box by code
    pub async fn find_box(&self, code: &str) -> Result<Option<StockBox>, StockBotError> {
        self.boxes.find_by_code(code).await
    }

    /// Boxes whose brand contains the given term
    pub async fn search_by_brand(&self, term: &str) -> Result<Vec<StockBox>, StockBotError> {
        self.boxes.find_by_brand_substring(term).await
    }

    /// Every box, in storage order
    pub async fn list_boxes(&self) -> Result<Vec<StockBox>, StockBotError> {
        self.boxes.list_all().await
    }

    /// Full adjustment history, newest first
    pub async fn list_history(&self) -> Result<Vec<HistoryEntry>, StockBotError> {
        self.history.list_recent_first().await
    }
}
