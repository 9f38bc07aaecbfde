//! In-memory catalog store for tests.
//!
//! A transaction works on a copy of the catalog that replaces the shared
//! state on commit, so dropped transactions leave no trace.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::domain::{IngredientRequirement, InventoryItem, Menu, MenuIngredient, NewInventoryItem};
use crate::error::DomainError;
use crate::repositories::{CatalogStore, CatalogTransaction};

#[derive(Debug, Clone, Default)]
struct CatalogState {
    inventory: Vec<InventoryItem>,
    menus: Vec<Menu>,
    next_id: i64,
    failing_names: HashSet<String>,
}

impl CatalogState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Inserts an inventory item outside any transaction.
    pub fn seed_inventory(&self, item: NewInventoryItem, today: NaiveDate) -> InventoryItem {
        let mut state = self.lock();
        let created = build_item(state.next_id(), &item, today);
        state.inventory.push(created.clone());
        created
    }

    /// Makes every later `create_inventory` call for `name` fail.
    pub fn fail_on_create(&self, name: &str) {
        self.lock().failing_names.insert(name.to_string());
    }

    pub fn inventory(&self) -> Vec<InventoryItem> {
        self.lock().inventory.clone()
    }

    pub fn inventory_item(&self, name: &str) -> Option<InventoryItem> {
        self.lock().inventory.iter().find(|i| i.name == name).cloned()
    }

    pub fn menus(&self) -> Vec<Menu> {
        self.lock().menus.clone()
    }

    pub fn menu(&self, name: &str) -> Option<Menu> {
        self.lock().menus.iter().find(|m| m.name == name).cloned()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    type Tx = InMemoryTransaction;

    async fn begin(&self) -> Result<Self::Tx, DomainError> {
        Ok(InMemoryTransaction {
            shared: Arc::clone(&self.state),
            working: self.lock().clone(),
        })
    }
}

pub struct InMemoryTransaction {
    shared: Arc<Mutex<CatalogState>>,
    working: CatalogState,
}

fn build_item(id: i64, item: &NewInventoryItem, today: NaiveDate) -> InventoryItem {
    let now = Utc::now();
    InventoryItem {
        id,
        name: item.name.clone(),
        category: item.category.clone(),
        quantity: item.quantity,
        unit: item.unit.clone(),
        min_quantity: item.min_quantity,
        price: item.price,
        last_updated: today,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl CatalogTransaction for InMemoryTransaction {
    async fn find_inventory_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<InventoryItem>, DomainError> {
        Ok(self.working.inventory.iter().find(|i| i.name == name).cloned())
    }

    async fn create_inventory(
        &mut self,
        item: &NewInventoryItem,
        today: NaiveDate,
    ) -> Result<InventoryItem, DomainError> {
        if self.working.failing_names.contains(&item.name) {
            return Err(DomainError::DatabaseError(format!(
                "injected failure for {}",
                item.name
            )));
        }
        if self.working.inventory.iter().any(|i| i.name == item.name) {
            return Err(DomainError::InventoryNameExists(item.name.clone()));
        }
        let id = self.working.next_id();
        let created = build_item(id, item, today);
        self.working.inventory.push(created.clone());
        Ok(created)
    }

    async fn update_inventory_stock(&mut self, item: &InventoryItem) -> Result<(), DomainError> {
        let stored = self
            .working
            .inventory
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or(DomainError::InventoryItemNotFound(item.id))?;
        stored.quantity = item.quantity;
        stored.last_updated = item.last_updated;
        stored.updated_at = Utc::now();
        Ok(())
    }

    async fn clear_catalog(&mut self) -> Result<(), DomainError> {
        self.working.menus.clear();
        self.working.inventory.clear();
        Ok(())
    }

    async fn find_menu_by_name(&mut self, name: &str) -> Result<Option<Menu>, DomainError> {
        Ok(self.working.menus.iter().find(|m| m.name == name).cloned())
    }

    async fn insert_menu(
        &mut self,
        name: &str,
        ingredients: &[IngredientRequirement],
    ) -> Result<Menu, DomainError> {
        if self.working.menus.iter().any(|m| m.name == name) {
            return Err(DomainError::MenuNameExists(name.to_string()));
        }
        let id = self.working.next_id();
        let mut rows = Vec::with_capacity(ingredients.len());
        for req in ingredients {
            let mut row = MenuIngredient::from(req);
            row.id = Some(self.working.next_id());
            rows.push(row);
        }
        let menu = Menu {
            id,
            name: name.to_string(),
            ingredients: rows,
        };
        self.working.menus.push(menu.clone());
        Ok(menu)
    }

    async fn update_menu(&mut self, menu: &Menu) -> Result<Menu, DomainError> {
        let mut saved = menu.clone();
        for row in saved.ingredients.iter_mut().filter(|r| r.id.is_none()) {
            row.id = Some(self.working.next_id());
        }
        let stored = self
            .working
            .menus
            .iter_mut()
            .find(|m| m.id == menu.id)
            .ok_or_else(|| DomainError::MenuNotFound(menu.name.clone()))?;
        *stored = saved.clone();
        Ok(saved)
    }

    async fn count_inventory(&mut self) -> Result<i64, DomainError> {
        Ok(self.working.inventory.len() as i64)
    }

    async fn count_uninitialized_inventory(&mut self) -> Result<i64, DomainError> {
        Ok(self
            .working
            .inventory
            .iter()
            .filter(|i| i.is_uninitialized())
            .count() as i64)
    }

    async fn commit(self) -> Result<(), DomainError> {
        let mut shared = self
            .shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *shared = self.working;
        Ok(())
    }
}
