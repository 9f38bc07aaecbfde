// ============================================================================
// Bizup Core - Purchase Orders
// File: crates/bizup-core/src/domain/order.rs
// Description: Purchase orders and reorder recommendations
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::inventory::InventoryItem;

/// Days of projected usage a recommendation tops up to.
pub const REORDER_BUFFER_DAYS: f64 = 7.0;
/// Reported when an item has no measurable usage.
pub const NO_USAGE_DAYS: i64 = 999;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OrderPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl OrderPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPriority::High => "high",
            OrderPriority::Medium => "medium",
            OrderPriority::Low => "low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high" => Some(OrderPriority::High),
            "medium" => Some(OrderPriority::Medium),
            "low" => Some(OrderPriority::Low),
            _ => None,
        }
    }

    pub fn for_days_remaining(days: i64) -> Self {
        if days <= 2 {
            OrderPriority::High
        } else if days <= 5 {
            OrderPriority::Medium
        } else {
            OrderPriority::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub status: OrderStatus,
    pub total_cost: f64,
    pub items: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i64,
    /// `None` once the inventory item has been deleted.
    pub inventory_item_id: Option<i64>,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: f64,
    pub total_price: f64,
    pub priority: OrderPriority,
}

/// Requested line of a new order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderRequestLine {
    pub inventory_item_id: i64,

    #[validate(range(exclusive_min = 0.0, message = "Order quantity must be positive"))]
    pub quantity: f64,

    #[serde(default)]
    pub priority: OrderPriority,
}

/// Priced line ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    pub inventory_item_id: i64,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
    pub priority: OrderPriority,
}

impl NewOrderLine {
    pub fn priced(request: &OrderRequestLine, item: &InventoryItem) -> Self {
        Self {
            inventory_item_id: item.id,
            name: item.name.clone(),
            unit: item.unit.clone(),
            quantity: request.quantity,
            unit_price: item.price,
            total_price: request.quantity * item.price,
            priority: request.priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecommendation {
    pub id: i64,
    pub name: String,
    pub current_stock: f64,
    pub min_stock: f64,
    pub avg_daily: f64,
    pub recommended_qty: f64,
    pub unit: String,
    pub priority: OrderPriority,
    pub estimated_cost: f64,
    pub days_until_out_of_stock: i64,
}

/// Estimated daily consumption: a thirtieth of the minimum stock, at least 0.5.
pub fn avg_daily_usage(item: &InventoryItem) -> f64 {
    (item.min_quantity / 30.0).max(0.5)
}

pub fn days_until_out_of_stock(current_stock: f64, avg_daily: f64) -> i64 {
    if avg_daily <= 0.0 {
        return NO_USAGE_DAYS;
    }
    (current_stock / avg_daily).floor() as i64
}

pub fn recommended_quantity(current_stock: f64, min_stock: f64, avg_daily: f64) -> f64 {
    let needed = min_stock + avg_daily * REORDER_BUFFER_DAYS;
    (needed - current_stock).max(0.0)
}

impl OrderRecommendation {
    /// `None` when the item needs no reorder.
    pub fn evaluate(item: &InventoryItem) -> Option<Self> {
        let avg_daily = avg_daily_usage(item);
        let days = days_until_out_of_stock(item.quantity, avg_daily);

        if item.quantity > item.min_quantity && days > REORDER_BUFFER_DAYS as i64 {
            return None;
        }

        let recommended_qty = recommended_quantity(item.quantity, item.min_quantity, avg_daily);
        if recommended_qty <= 0.0 {
            return None;
        }

        Some(Self {
            id: item.id,
            name: item.name.clone(),
            current_stock: item.quantity,
            min_stock: item.min_quantity,
            avg_daily,
            recommended_qty,
            unit: item.unit.clone(),
            priority: OrderPriority::for_days_remaining(days),
            estimated_cost: recommended_qty * item.price,
            days_until_out_of_stock: days,
        })
    }
}
