//! Database module (SQLite adapters)

pub mod connection;
pub mod sqlite;

pub use connection::{create_memory_pool, create_pool, run_migrations};
pub use sqlite::{
    SqliteCatalogStore, SqliteContractRepository, SqliteEmployeeRepository,
    SqliteInventoryRepository, SqliteMenuRepository, SqliteOrderRepository,
    SqliteStoreRepository,
};
