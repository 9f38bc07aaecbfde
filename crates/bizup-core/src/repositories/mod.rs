//! Repository traits (ports)

pub mod catalog;
pub mod contract_repository;
pub mod employee_repository;
pub mod inventory_repository;
pub mod menu_repository;
pub mod order_repository;
pub mod store_repository;

pub use catalog::{CatalogStore, CatalogTransaction};
pub use contract_repository::ContractRepository;
pub use employee_repository::EmployeeRepository;
pub use inventory_repository::InventoryRepository;
pub use menu_repository::MenuRepository;
pub use order_repository::OrderRepository;
pub use store_repository::StoreRepository;

#[cfg(test)]
pub use contract_repository::MockContractRepository;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use inventory_repository::MockInventoryRepository;
#[cfg(test)]
pub use menu_repository::MockMenuRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use store_repository::MockStoreRepository;
