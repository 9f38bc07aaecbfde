// ============================================================================
// Bizup Core - Sales
// File: crates/bizup-core/src/domain/sale.rs
// Description: Sale events and per-event deduction outcomes
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::inventory::InventoryItem;
use super::stock::StockStatus;

/// One sold menu line reported by the point of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SaleEvent {
    #[validate(length(min = 1, message = "Menu name is required"))]
    pub menu_name: String,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,

    /// Informational only.
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaleOutcome {
    Success {
        menu_name: String,
        quantity: u32,
        deducted_items: Vec<IngredientDeduction>,
    },
    Error {
        menu_name: String,
        message: String,
    },
}

impl SaleOutcome {
    pub fn error(menu_name: &str, message: impl Into<String>) -> Self {
        SaleOutcome::Error {
            menu_name: menu_name.to_string(),
            message: message.into(),
        }
    }

    pub fn menu_not_found(menu_name: &str) -> Self {
        Self::error(menu_name, format!("Menu '{}' not found", menu_name))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SaleOutcome::Success { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IngredientDeduction {
    Deducted {
        ingredient: String,
        deducted: f64,
        remaining: f64,
        old_quantity: f64,
        status: StockStatus,
        status_changed: bool,
        warning: Option<String>,
    },
    Missing {
        ingredient: String,
        deducted: f64,
        remaining: f64,
        message: String,
    },
}

impl IngredientDeduction {
    /// Outcome for an item already lowered from `old_quantity` by `deducted`.
    pub fn applied(item: &InventoryItem, old_quantity: f64, deducted: f64) -> Self {
        let before = StockStatus::classify(old_quantity, item.min_quantity);
        let after = item.status();
        let status_changed = before != after;
        let warning = if status_changed {
            threshold_warning(item, after)
        } else {
            None
        };

        IngredientDeduction::Deducted {
            ingredient: item.name.clone(),
            deducted,
            remaining: item.quantity,
            old_quantity,
            status: after,
            status_changed,
            warning,
        }
    }

    pub fn missing(ingredient: &str) -> Self {
        IngredientDeduction::Missing {
            ingredient: ingredient.to_string(),
            deducted: 0.0,
            remaining: 0.0,
            message: format!(
                "Ingredient '{}' is not registered in inventory. Re-upload the menu CSV to register it.",
                ingredient
            ),
        }
    }

    pub fn ingredient(&self) -> &str {
        match self {
            IngredientDeduction::Deducted { ingredient, .. }
            | IngredientDeduction::Missing { ingredient, .. } => ingredient,
        }
    }
}

fn threshold_warning(item: &InventoryItem, status: StockStatus) -> Option<String> {
    match status {
        StockStatus::OutOfStock => Some(format!("{} is out of stock!", item.name)),
        StockStatus::Low => Some(format!(
            "{} is running low! (current: {}{unit}, minimum: {}{unit})",
            item.name,
            item.quantity,
            item.min_quantity,
            unit = item.unit
        )),
        StockStatus::Normal => None,
    }
}
