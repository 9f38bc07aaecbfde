//! Contract repository trait (port)

use async_trait::async_trait;

use crate::domain::{Contract, NewContract};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContractRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Contract>, DomainError>;
    async fn list_by_employee(&self, employee_id: i64) -> Result<Vec<Contract>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Contract>, DomainError>;
    async fn create(&self, contract: &NewContract) -> Result<Contract, DomainError>;
    async fn update(&self, contract: &Contract) -> Result<Contract, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
