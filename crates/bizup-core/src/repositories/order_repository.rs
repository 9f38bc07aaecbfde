//! Purchase order repository trait (port)

use async_trait::async_trait;

use crate::domain::{NewOrderLine, Order};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores a pending order with its lines.
    async fn create(&self, lines: Vec<NewOrderLine>, total_cost: f64)
        -> Result<Order, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;
}
