// ============================================================================
// Bizup Core - Stock Status
// File: crates/bizup-core/src/domain/stock.rs
// Description: Derived stock health classification
// ============================================================================

use serde::{Deserialize, Serialize};

/// Stock health derived from `(quantity, min_quantity)`. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Normal,
    Low,
    OutOfStock,
}

impl StockStatus {
    /// `quantity == 0` is out of stock, `0 < quantity <= min` is low.
    pub fn classify(quantity: f64, min_quantity: f64) -> Self {
        if quantity == 0.0 {
            StockStatus::OutOfStock
        } else if quantity <= min_quantity {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Normal => "NORMAL",
            StockStatus::Low => "LOW",
            StockStatus::OutOfStock => "OUT_OF_STOCK",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
