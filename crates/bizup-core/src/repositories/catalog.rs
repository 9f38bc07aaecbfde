//! Transactional catalog store (port)
//!
//! Menu uploads and sales batches each run inside one transaction opened
//! with [`CatalogStore::begin`]. Statements that fail inside it leave the
//! rest of the transaction usable. Dropping a transaction without
//! [`CatalogTransaction::commit`] discards its writes.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{IngredientRequirement, InventoryItem, Menu, NewInventoryItem};
use crate::error::DomainError;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    type Tx: CatalogTransaction;

    async fn begin(&self) -> Result<Self::Tx, DomainError>;
}

#[async_trait]
pub trait CatalogTransaction: Send + Sized {
    async fn find_inventory_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<InventoryItem>, DomainError>;

    async fn create_inventory(
        &mut self,
        item: &NewInventoryItem,
        today: NaiveDate,
    ) -> Result<InventoryItem, DomainError>;

    /// Writes quantity and last-updated date.
    async fn update_inventory_stock(&mut self, item: &InventoryItem) -> Result<(), DomainError>;

    /// Deletes every menu, ingredient row and inventory item.
    async fn clear_catalog(&mut self) -> Result<(), DomainError>;

    async fn find_menu_by_name(&mut self, name: &str) -> Result<Option<Menu>, DomainError>;

    async fn insert_menu(
        &mut self,
        name: &str,
        ingredients: &[IngredientRequirement],
    ) -> Result<Menu, DomainError>;

    /// Persists ingredient rows: rows with an id are updated, rows without are inserted.
    async fn update_menu(&mut self, menu: &Menu) -> Result<Menu, DomainError>;

    async fn count_inventory(&mut self) -> Result<i64, DomainError>;

    async fn count_uninitialized_inventory(&mut self) -> Result<i64, DomainError>;

    async fn commit(self) -> Result<(), DomainError>;
}
