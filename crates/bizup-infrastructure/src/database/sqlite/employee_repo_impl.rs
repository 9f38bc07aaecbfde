// ============================================================================
// Bizup Infrastructure - SQLite Employee Repository
// File: crates/bizup-infrastructure/src/database/sqlite/employee_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use bizup_core::domain::{Employee, EmployeeStatus, NewEmployee};
use bizup_core::error::DomainError;
use bizup_core::repositories::EmployeeRepository;

use super::db_error;
use super::rows::{EmployeeRow, EMPLOYEE_COLUMNS};

pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, DomainError> {
        let sql = format!("SELECT {} FROM employees ORDER BY id", EMPLOYEE_COLUMNS);
        let rows: Vec<EmployeeRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing employees", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError> {
        let sql = format!("SELECT {} FROM employees WHERE id = ?", EMPLOYEE_COLUMNS);
        let row: Option<EmployeeRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding employee by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(
        &self,
        employee: &NewEmployee,
        join_date: NaiveDate,
    ) -> Result<Employee, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, role, phone, status, join_date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.role)
        .bind(&employee.phone)
        .bind(EmployeeStatus::Active.as_str())
        .bind(join_date)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("creating employee", e))?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or(DomainError::EmployeeNotFound(id))
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, role = ?, phone = ?, status = ?, join_date = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.role)
        .bind(&employee.phone)
        .bind(employee.status.as_str())
        .bind(employee.join_date)
        .bind(Utc::now())
        .bind(employee.id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("updating employee", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EmployeeNotFound(employee.id));
        }
        self.find_by_id(employee.id)
            .await?
            .ok_or(DomainError::EmployeeNotFound(employee.id))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting employee", e))?;

        Ok(result.rows_affected() > 0)
    }
}
