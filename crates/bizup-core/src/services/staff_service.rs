// ============================================================================
// Bizup Core - Staff Service
// File: crates/bizup-core/src/services/staff_service.rs
// ============================================================================
//! Employees and their employment contracts.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{Contract, ContractPatch, Employee, EmployeePatch, NewContract, NewEmployee};
use crate::error::DomainError;
use crate::repositories::{ContractRepository, EmployeeRepository};

pub struct StaffService<E: EmployeeRepository, C: ContractRepository> {
    employees: Arc<E>,
    contracts: Arc<C>,
}

impl<E: EmployeeRepository, C: ContractRepository> StaffService<E, C> {
    pub fn new(employees: Arc<E>, contracts: Arc<C>) -> Self {
        Self {
            employees,
            contracts,
        }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, DomainError> {
        self.employees.list().await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, DomainError> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or(DomainError::EmployeeNotFound(id))
    }

    pub async fn create_employee(
        &self,
        employee: NewEmployee,
        today: NaiveDate,
    ) -> Result<Employee, DomainError> {
        employee.validate()?;
        let join_date = employee.join_date.unwrap_or(today);
        let created = self.employees.create(&employee, join_date).await?;
        info!(id = created.id, "Employee created: {}", created.name);
        Ok(created)
    }

    pub async fn update_employee(
        &self,
        id: i64,
        patch: EmployeePatch,
    ) -> Result<Employee, DomainError> {
        patch.validate()?;
        let mut employee = self.get_employee(id).await?;
        patch.apply(&mut employee);
        self.employees.update(&employee).await
    }

    /// Also removes the employee's contracts.
    pub async fn delete_employee(&self, id: i64) -> Result<(), DomainError> {
        if !self.employees.delete(id).await? {
            return Err(DomainError::EmployeeNotFound(id));
        }
        info!(id, "Employee deleted");
        Ok(())
    }

    pub async fn list_contracts(&self) -> Result<Vec<Contract>, DomainError> {
        self.contracts.list().await
    }

    pub async fn contracts_for_employee(
        &self,
        employee_id: i64,
    ) -> Result<Vec<Contract>, DomainError> {
        self.contracts.list_by_employee(employee_id).await
    }

    pub async fn get_contract(&self, id: i64) -> Result<Contract, DomainError> {
        self.contracts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ContractNotFound(id))
    }

    pub async fn create_contract(&self, contract: NewContract) -> Result<Contract, DomainError> {
        contract.validate()?;
        self.get_employee(contract.employee_id).await?;

        if !contract.has_valid_signature() {
            warn!(employee_id = contract.employee_id, "Contract rejected: invalid signature");
            return Err(DomainError::InvalidSignature);
        }

        let created = self.contracts.create(&contract).await?;
        info!(id = created.id, employee_id = created.employee_id, "Contract created");
        Ok(created)
    }

    pub async fn update_contract(
        &self,
        id: i64,
        patch: ContractPatch,
    ) -> Result<Contract, DomainError> {
        patch.validate()?;
        let mut contract = self.get_contract(id).await?;
        patch.apply(&mut contract);
        self.contracts.update(&contract).await
    }

    pub async fn delete_contract(&self, id: i64) -> Result<(), DomainError> {
        if !self.contracts.delete(id).await? {
            return Err(DomainError::ContractNotFound(id));
        }
        info!(id, "Contract deleted");
        Ok(())
    }
}
