// ============================================================================
// Bizup Core - Inventory Entity
// File: crates/bizup-core/src/domain/inventory.rs
// Description: Stock record keyed by unique ingredient/product name
// ============================================================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::stock::StockStatus;

/// Category given to items registered by an additive CSV upload.
pub const SEED_CATEGORY: &str = "Uncategorized";
pub const SEED_UNIT: &str = "ml";
pub const SEED_QUANTITY: f64 = 100.0;
pub const SEED_MIN_QUANTITY: f64 = 5.0;
pub const SEED_PRICE: f64 = 1200.0;

/// Inventory item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub min_quantity: f64,
    pub price: f64,
    /// Date of the last stock change.
    pub last_updated: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.min_quantity)
    }

    /// Blank category or unit: a reset-upload placeholder nobody has configured yet.
    pub fn is_uninitialized(&self) -> bool {
        self.category.trim().is_empty() || self.unit.trim().is_empty()
    }

    pub fn is_low_stock(&self) -> bool {
        self.status() == StockStatus::Low
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.status() == StockStatus::OutOfStock
    }

    /// Lowers the quantity by `amount`, clamping at zero. Returns the previous quantity.
    pub fn deduct(&mut self, amount: f64, today: NaiveDate) -> f64 {
        let previous = self.quantity;
        self.quantity = (self.quantity - amount).max(0.0);
        self.last_updated = today;
        self.updated_at = Utc::now();
        previous
    }
}

/// Insert payload for an inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewInventoryItem {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Category must be between 1 and 50 characters"))]
    pub category: String,

    #[validate(range(min = 0.0, message = "Quantity cannot be negative"))]
    pub quantity: f64,

    #[validate(length(min = 1, max = 20, message = "Unit must be between 1 and 20 characters"))]
    pub unit: String,

    #[validate(range(min = 0.0, message = "Minimum quantity cannot be negative"))]
    pub min_quantity: f64,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
}

impl NewInventoryItem {
    /// Usable defaults for an ingredient first seen in an additive upload.
    pub fn seeded(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            category: SEED_CATEGORY.to_string(),
            quantity: SEED_QUANTITY,
            unit: SEED_UNIT.to_string(),
            min_quantity: SEED_MIN_QUANTITY,
            price: SEED_PRICE,
        }
    }

    /// Zeroed placeholder for a reset upload; stays uninitialized until edited.
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            category: String::new(),
            quantity: 0.0,
            unit: String::new(),
            min_quantity: 0.0,
            price: 0.0,
        }
    }
}

/// Sparse update: only present fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct InventoryPatch {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Category must be between 1 and 50 characters"))]
    pub category: Option<String>,

    #[validate(range(min = 0.0, message = "Quantity cannot be negative"))]
    pub quantity: Option<f64>,

    #[validate(length(min = 1, max = 20, message = "Unit must be between 1 and 20 characters"))]
    pub unit: Option<String>,

    #[validate(range(min = 0.0, message = "Minimum quantity cannot be negative"))]
    pub min_quantity: Option<f64>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
}

impl InventoryPatch {
    pub fn restock(quantity: f64) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    pub fn apply(self, item: &mut InventoryItem, today: NaiveDate) {
        if let Some(name) = self.name {
            item.name = name.trim().to_string();
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = self.unit {
            item.unit = unit;
        }
        if let Some(min_quantity) = self.min_quantity {
            item.min_quantity = min_quantity;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        item.last_updated = today;
        item.updated_at = Utc::now();
    }
}

/// Inventory item with its derived status, as shown to operators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItemWithStatus {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub status: StockStatus,
}

impl From<InventoryItem> for InventoryItemWithStatus {
    fn from(item: InventoryItem) -> Self {
        let status = item.status();
        Self { item, status }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_items: usize,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}

impl InventoryStats {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        Self {
            total_items: items.len(),
            low_stock_count: items.iter().filter(|i| i.is_low_stock()).count(),
            out_of_stock_count: items.iter().filter(|i| i.is_out_of_stock()).count(),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_item(id: i64, name: &str, quantity: f64, min_quantity: f64) -> InventoryItem {
    let now = Utc::now();
    InventoryItem {
        id,
        name: name.to_string(),
        category: "Dairy".to_string(),
        quantity,
        unit: "ml".to_string(),
        min_quantity,
        price: 10.0,
        last_updated: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        created_at: now,
        updated_at: now,
    }
}
