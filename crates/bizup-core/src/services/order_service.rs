// ============================================================================
// Bizup Core - Order Service
// File: crates/bizup-core/src/services/order_service.rs
// ============================================================================

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::domain::{NewOrderLine, Order, OrderRecommendation, OrderRequestLine};
use crate::error::DomainError;
use crate::repositories::{InventoryRepository, OrderRepository};

pub struct OrderService<I: InventoryRepository, O: OrderRepository> {
    inventory: Arc<I>,
    orders: Arc<O>,
}

impl<I: InventoryRepository, O: OrderRepository> OrderService<I, O> {
    pub fn new(inventory: Arc<I>, orders: Arc<O>) -> Self {
        Self { inventory, orders }
    }

    /// Items that need reordering, most urgent first.
    pub async fn recommendations(&self) -> Result<Vec<OrderRecommendation>, DomainError> {
        let mut recommendations: Vec<OrderRecommendation> = self
            .inventory
            .list_all()
            .await?
            .iter()
            .filter_map(OrderRecommendation::evaluate)
            .collect();
        recommendations.sort_by_key(|r| r.priority);
        Ok(recommendations)
    }

    /// Prices each line at the item's current price. Unknown items are skipped.
    pub async fn create_order(&self, lines: Vec<OrderRequestLine>) -> Result<Order, DomainError> {
        for line in &lines {
            line.validate()?;
        }

        let mut priced = Vec::with_capacity(lines.len());
        for line in &lines {
            match self.inventory.find_by_id(line.inventory_item_id).await? {
                Some(item) => priced.push(NewOrderLine::priced(line, &item)),
                None => warn!(
                    inventory_item_id = line.inventory_item_id,
                    "Order line skipped: unknown inventory item"
                ),
            }
        }

        let total_cost: f64 = priced.iter().map(|l| l.total_price).sum();
        let order = self.orders.create(priced, total_cost).await?;
        info!(id = order.id, lines = order.items.len(), total_cost, "Order created");
        Ok(order)
    }
}
