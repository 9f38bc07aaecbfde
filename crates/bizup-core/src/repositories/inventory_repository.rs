//! Inventory repository trait (port)

use async_trait::async_trait;
use bizup_shared::types::Pagination;
use chrono::NaiveDate;

use crate::domain::{InventoryItem, NewInventoryItem};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<InventoryItem>, DomainError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<InventoryItem>, DomainError>;
    /// Substring `search` matches name or category.
    async fn list(
        &self,
        page: Pagination,
        search: Option<String>,
    ) -> Result<Vec<InventoryItem>, DomainError>;
    async fn list_all(&self) -> Result<Vec<InventoryItem>, DomainError>;
    async fn list_out_of_stock(&self) -> Result<Vec<InventoryItem>, DomainError>;
    async fn create(
        &self,
        item: &NewInventoryItem,
        today: NaiveDate,
    ) -> Result<InventoryItem, DomainError>;
    async fn update(&self, item: &InventoryItem) -> Result<InventoryItem, DomainError>;
    /// Returns `false` when no row matched.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
