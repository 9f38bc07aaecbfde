// ============================================================================
// Bizup Infrastructure - SQLite Catalog Store
// File: crates/bizup-infrastructure/src/database/sqlite/catalog_store_impl.rs
// ============================================================================
//! One SQLite transaction per menu upload or sales batch. A failed
//! statement only aborts itself, so per-item failures leave the rest of
//! the transaction intact.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use bizup_core::domain::{IngredientRequirement, InventoryItem, Menu, NewInventoryItem};
use bizup_core::error::DomainError;
use bizup_core::repositories::{CatalogStore, CatalogTransaction};

use super::{catalog_queries as q, db_error};

#[derive(Clone)]
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    type Tx = SqliteCatalogTransaction;

    async fn begin(&self) -> Result<Self::Tx, DomainError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("beginning catalog transaction", e))?;
        debug!("Catalog transaction started");
        Ok(SqliteCatalogTransaction { tx })
    }
}

pub struct SqliteCatalogTransaction {
    tx: Transaction<'static, Sqlite>,
}

#[async_trait]
impl CatalogTransaction for SqliteCatalogTransaction {
    async fn find_inventory_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<InventoryItem>, DomainError> {
        q::find_inventory_by_name(&mut self.tx, name).await
    }

    async fn create_inventory(
        &mut self,
        item: &NewInventoryItem,
        today: NaiveDate,
    ) -> Result<InventoryItem, DomainError> {
        q::insert_inventory(&mut self.tx, item, today).await
    }

    async fn update_inventory_stock(&mut self, item: &InventoryItem) -> Result<(), DomainError> {
        q::update_inventory_stock(&mut self.tx, item).await
    }

    async fn clear_catalog(&mut self) -> Result<(), DomainError> {
        q::clear_catalog(&mut self.tx).await
    }

    async fn find_menu_by_name(&mut self, name: &str) -> Result<Option<Menu>, DomainError> {
        q::find_menu_by_name(&mut self.tx, name).await
    }

    async fn insert_menu(
        &mut self,
        name: &str,
        ingredients: &[IngredientRequirement],
    ) -> Result<Menu, DomainError> {
        q::insert_menu(&mut self.tx, name, ingredients).await
    }

    async fn update_menu(&mut self, menu: &Menu) -> Result<Menu, DomainError> {
        q::update_menu(&mut self.tx, menu).await
    }

    async fn count_inventory(&mut self) -> Result<i64, DomainError> {
        q::count_inventory(&mut self.tx).await
    }

    async fn count_uninitialized_inventory(&mut self) -> Result<i64, DomainError> {
        q::count_uninitialized_inventory(&mut self.tx).await
    }

    async fn commit(self) -> Result<(), DomainError> {
        self.tx
            .commit()
            .await
            .map_err(|e| db_error("committing catalog transaction", e))?;
        debug!("Catalog transaction committed");
        Ok(())
    }
}
