//! Employee repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Employee, NewEmployee};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError>;
    async fn create(
        &self,
        employee: &NewEmployee,
        join_date: NaiveDate,
    ) -> Result<Employee, DomainError>;
    async fn update(&self, employee: &Employee) -> Result<Employee, DomainError>;
    /// Contracts of the employee are removed with it.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
