// ============================================================================
// Bizup Core - Inventory Service
// File: crates/bizup-core/src/services/inventory_service.rs
// ============================================================================

use std::sync::Arc;

use bizup_shared::types::Pagination;
use chrono::NaiveDate;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{
    InventoryItem, InventoryItemWithStatus, InventoryPatch, InventoryStats, NewInventoryItem,
};
use crate::error::DomainError;
use crate::repositories::InventoryRepository;

pub struct InventoryService<R: InventoryRepository> {
    repo: Arc<R>,
}

impl<R: InventoryRepository> InventoryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        page: Pagination,
        search: Option<String>,
    ) -> Result<Vec<InventoryItemWithStatus>, DomainError> {
        let search = search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        let items = self.repo.list(page, search).await?;
        Ok(items.into_iter().map(InventoryItemWithStatus::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<InventoryItemWithStatus, DomainError> {
        self.find(id).await.map(InventoryItemWithStatus::from)
    }

    pub async fn create(
        &self,
        item: NewInventoryItem,
        today: NaiveDate,
    ) -> Result<InventoryItemWithStatus, DomainError> {
        item.validate()?;
        let item = NewInventoryItem {
            name: item.name.trim().to_string(),
            ..item
        };

        if self.repo.find_by_name(&item.name).await?.is_some() {
            warn!("Inventory create rejected, name exists: {}", item.name);
            return Err(DomainError::InventoryNameExists(item.name));
        }

        let created = self.repo.create(&item, today).await?;
        info!(id = created.id, "Inventory item created: {}", created.name);
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: i64,
        patch: InventoryPatch,
        today: NaiveDate,
    ) -> Result<InventoryItemWithStatus, DomainError> {
        patch.validate()?;
        let mut item = self.find(id).await?;

        if let Some(name) = patch.name.as_deref().map(str::trim) {
            if name != item.name {
                if let Some(other) = self.repo.find_by_name(name).await? {
                    if other.id != id {
                        return Err(DomainError::InventoryNameExists(name.to_string()));
                    }
                }
            }
        }

        patch.apply(&mut item, today);
        let updated = self.repo.update(&item).await?;
        info!(id, "Inventory item updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::InventoryItemNotFound(id));
        }
        info!(id, "Inventory item deleted");
        Ok(())
    }

    /// Items with 0 < quantity <= minimum.
    pub async fn low_stock(&self) -> Result<Vec<InventoryItemWithStatus>, DomainError> {
        let items = self.repo.list_all().await?;
        Ok(items
            .into_iter()
            .filter(InventoryItem::is_low_stock)
            .map(InventoryItemWithStatus::from)
            .collect())
    }

    pub async fn stats(&self) -> Result<InventoryStats, DomainError> {
        let items = self.repo.list_all().await?;
        Ok(InventoryStats::from_items(&items))
    }

    pub async fn restock(
        &self,
        id: i64,
        quantity: f64,
        today: NaiveDate,
    ) -> Result<InventoryItemWithStatus, DomainError> {
        if !(quantity > 0.0) {
            return Err(DomainError::ValidationError(
                "Restock quantity must be positive".to_string(),
            ));
        }
        let updated = self.update(id, InventoryPatch::restock(quantity), today).await?;
        info!(id, quantity, "Inventory item restocked");
        Ok(updated)
    }

    async fn find(&self, id: i64) -> Result<InventoryItem, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::InventoryItemNotFound(id))
    }
}
