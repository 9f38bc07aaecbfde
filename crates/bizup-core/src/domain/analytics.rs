// ============================================================================
// Bizup Core - Out-of-stock Analytics
// File: crates/bizup-core/src/domain/analytics.rs
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::inventory::InventoryItem;
use super::order::avg_daily_usage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Recent,
}

impl Severity {
    pub fn for_days(days: i64) -> Self {
        if days >= 5 {
            Severity::Critical
        } else if days >= 2 {
            Severity::Warning
        } else {
            Severity::Recent
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutOfStockItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub days_out_of_stock: i64,
    pub last_stock: f64,
    pub unit: String,
    pub estimated_loss: f64,
    pub status: Severity,
}

impl OutOfStockItem {
    pub fn from_item(item: &InventoryItem, today: NaiveDate) -> Self {
        let days = days_since(item.last_updated, today);
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            days_out_of_stock: days,
            last_stock: item.min_quantity,
            unit: item.unit.clone(),
            estimated_loss: item.price * avg_daily_usage(item) * days as f64,
            status: Severity::for_days(days),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutOfStockMenu {
    pub id: i64,
    pub name: String,
    pub missing_ingredients: Vec<String>,
    pub days_out_of_stock: i64,
    pub status: Severity,
}

pub fn days_since(date: NaiveDate, today: NaiveDate) -> i64 {
    (today - date).num_days()
}
