// ============================================================================
// Bizup Core - Out-of-stock Service
// File: crates/bizup-core/src/services/out_of_stock_service.rs
// ============================================================================
//! Reports on items at zero stock and the menus they block.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::analytics::days_since;
use crate::domain::{OutOfStockItem, OutOfStockMenu, Severity};
use crate::error::DomainError;
use crate::repositories::{InventoryRepository, MenuRepository};

pub struct OutOfStockService<I: InventoryRepository, M: MenuRepository> {
    inventory: Arc<I>,
    menus: Arc<M>,
}

impl<I: InventoryRepository, M: MenuRepository> OutOfStockService<I, M> {
    pub fn new(inventory: Arc<I>, menus: Arc<M>) -> Self {
        Self { inventory, menus }
    }

    /// Longest outage first.
    pub async fn items(&self, today: NaiveDate) -> Result<Vec<OutOfStockItem>, DomainError> {
        let mut rows: Vec<OutOfStockItem> = self
            .inventory
            .list_out_of_stock()
            .await?
            .iter()
            .map(|item| OutOfStockItem::from_item(item, today))
            .collect();
        rows.sort_by(|a, b| b.days_out_of_stock.cmp(&a.days_out_of_stock));
        Ok(rows)
    }

    pub async fn menus(&self, today: NaiveDate) -> Result<Vec<OutOfStockMenu>, DomainError> {
        let out_of_stock: HashMap<String, i64> = self
            .inventory
            .list_out_of_stock()
            .await?
            .into_iter()
            .map(|item| (item.name, days_since(item.last_updated, today)))
            .collect();
        if out_of_stock.is_empty() {
            return Ok(Vec::new());
        }

        let mut rows = Vec::new();
        for menu in self.menus.list().await? {
            let mut missing = Vec::new();
            let mut max_days = 0;
            for row in &menu.ingredients {
                if let Some(days) = out_of_stock.get(&row.ingredient_name) {
                    missing.push(row.ingredient_name.clone());
                    max_days = max_days.max(*days);
                }
            }
            if !missing.is_empty() {
                rows.push(OutOfStockMenu {
                    id: menu.id,
                    name: menu.name,
                    missing_ingredients: missing,
                    days_out_of_stock: max_days,
                    status: Severity::for_days(max_days),
                });
            }
        }

        rows.sort_by(|a, b| b.days_out_of_stock.cmp(&a.days_out_of_stock));
        Ok(rows)
    }
}
