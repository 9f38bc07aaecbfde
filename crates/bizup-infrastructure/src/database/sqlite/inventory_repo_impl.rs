// ============================================================================
// Bizup Infrastructure - SQLite Inventory Repository
// File: crates/bizup-infrastructure/src/database/sqlite/inventory_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};

use bizup_core::domain::{InventoryItem, NewInventoryItem};
use bizup_core::error::DomainError;
use bizup_core::repositories::InventoryRepository;
use bizup_shared::types::Pagination;

use super::{catalog_queries as q, db_error};

pub struct SqliteInventoryRepository {
    pool: SqlitePool,
}

impl SqliteInventoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> Result<PoolConnection<Sqlite>, DomainError> {
        self.pool
            .acquire()
            .await
            .map_err(|e| db_error("acquiring connection", e))
    }
}

#[async_trait]
impl InventoryRepository for SqliteInventoryRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<InventoryItem>, DomainError> {
        q::find_inventory_by_id(&mut *self.conn().await?, id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<InventoryItem>, DomainError> {
        q::find_inventory_by_name(&mut *self.conn().await?, name).await
    }

    async fn list(
        &self,
        page: Pagination,
        search: Option<String>,
    ) -> Result<Vec<InventoryItem>, DomainError> {
        q::list_inventory(&mut *self.conn().await?, page, search.as_deref()).await
    }

    async fn list_all(&self) -> Result<Vec<InventoryItem>, DomainError> {
        q::list_all_inventory(&mut *self.conn().await?).await
    }

    async fn list_out_of_stock(&self) -> Result<Vec<InventoryItem>, DomainError> {
        q::list_out_of_stock(&mut *self.conn().await?).await
    }

    async fn create(
        &self,
        item: &NewInventoryItem,
        today: NaiveDate,
    ) -> Result<InventoryItem, DomainError> {
        q::insert_inventory(&mut *self.conn().await?, item, today).await
    }

    async fn update(&self, item: &InventoryItem) -> Result<InventoryItem, DomainError> {
        q::update_inventory(&mut *self.conn().await?, item).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        q::delete_inventory(&mut *self.conn().await?, id).await
    }
}
