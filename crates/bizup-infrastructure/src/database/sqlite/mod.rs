//! SQLite repository implementations

mod catalog_queries;
mod rows;

pub mod catalog_store_impl;
pub mod contract_repo_impl;
pub mod employee_repo_impl;
pub mod inventory_repo_impl;
pub mod menu_repo_impl;
pub mod order_repo_impl;
pub mod store_repo_impl;

pub use catalog_store_impl::{SqliteCatalogStore, SqliteCatalogTransaction};
pub use contract_repo_impl::SqliteContractRepository;
pub use employee_repo_impl::SqliteEmployeeRepository;
pub use inventory_repo_impl::SqliteInventoryRepository;
pub use menu_repo_impl::SqliteMenuRepository;
pub use order_repo_impl::SqliteOrderRepository;
pub use store_repo_impl::SqliteStoreRepository;

use bizup_core::error::DomainError;
use tracing::error;

pub(crate) fn db_error(operation: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", operation, e);
    DomainError::DatabaseError(e.to_string())
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
