//! # Bizup Infrastructure
//!
//! SQLite adapters for the core repository traits.

pub mod database;

pub use database::{
    create_memory_pool, create_pool, run_migrations, SqliteCatalogStore,
    SqliteContractRepository, SqliteEmployeeRepository, SqliteInventoryRepository,
    SqliteMenuRepository, SqliteOrderRepository, SqliteStoreRepository,
};
