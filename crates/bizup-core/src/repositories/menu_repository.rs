//! Menu repository trait (port)

use async_trait::async_trait;

use crate::domain::Menu;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Every menu with its ingredient rows in insertion order.
    async fn list(&self) -> Result<Vec<Menu>, DomainError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Menu>, DomainError>;
    /// Removes the menu and its ingredient rows.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
