// ============================================================================
// Bizup Infrastructure - SQLite Contract Repository
// File: crates/bizup-infrastructure/src/database/sqlite/contract_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use bizup_core::domain::{Contract, NewContract};
use bizup_core::error::DomainError;
use bizup_core::repositories::ContractRepository;

use super::db_error;
use super::rows::{ContractRow, CONTRACT_COLUMNS};

pub struct SqliteContractRepository {
    pool: SqlitePool,
}

impl SqliteContractRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContractRepository for SqliteContractRepository {
    async fn list(&self) -> Result<Vec<Contract>, DomainError> {
        let sql = format!("SELECT {} FROM contracts ORDER BY id", CONTRACT_COLUMNS);
        let rows: Vec<ContractRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing contracts", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_employee(&self, employee_id: i64) -> Result<Vec<Contract>, DomainError> {
        let sql = format!(
            "SELECT {} FROM contracts WHERE employee_id = ? ORDER BY id",
            CONTRACT_COLUMNS
        );
        let rows: Vec<ContractRow> = sqlx::query_as(&sql)
            .bind(employee_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing contracts by employee", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contract>, DomainError> {
        let sql = format!("SELECT {} FROM contracts WHERE id = ?", CONTRACT_COLUMNS);
        let row: Option<ContractRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding contract by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, contract: &NewContract) -> Result<Contract, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO contracts (
                employee_id, employer_name, working_conditions, wage, contract_date,
                employee_name, employee_address, employee_phone, employee_signature,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(contract.employee_id)
        .bind(&contract.employer_name)
        .bind(&contract.working_conditions)
        .bind(&contract.wage)
        .bind(contract.contract_date)
        .bind(&contract.employee_name)
        .bind(&contract.employee_address)
        .bind(&contract.employee_phone)
        .bind(&contract.employee_signature)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("creating contract", e))?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or(DomainError::ContractNotFound(id))
    }

    async fn update(&self, contract: &Contract) -> Result<Contract, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE contracts
            SET employer_name = ?, working_conditions = ?, wage = ?, contract_date = ?,
                employee_name = ?, employee_address = ?, employee_phone = ?,
                employee_signature = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&contract.employer_name)
        .bind(&contract.working_conditions)
        .bind(&contract.wage)
        .bind(contract.contract_date)
        .bind(&contract.employee_name)
        .bind(&contract.employee_address)
        .bind(&contract.employee_phone)
        .bind(&contract.employee_signature)
        .bind(Utc::now())
        .bind(contract.id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("updating contract", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ContractNotFound(contract.id));
        }
        self.find_by_id(contract.id)
            .await?
            .ok_or(DomainError::ContractNotFound(contract.id))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM contracts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting contract", e))?;

        Ok(result.rows_affected() > 0)
    }
}
