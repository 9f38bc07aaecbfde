//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Inventory item not found: {0}")]
    InventoryItemNotFound(i64),

    #[error("Inventory item already exists: {0}")]
    InventoryNameExists(String),

    #[error("{0} inventory items are not initialized. Fill in category and unit before receiving sales")]
    InventoryUninitialized(i64),

    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    #[error("Menu already exists: {0}")]
    MenuNameExists(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(i64),

    #[error("Contract not found: {0}")]
    ContractNotFound(i64),

    #[error("Employee signature is not valid")]
    InvalidSignature,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
