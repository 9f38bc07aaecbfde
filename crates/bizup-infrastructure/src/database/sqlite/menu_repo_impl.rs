// ============================================================================
// Bizup Infrastructure - SQLite Menu Repository
// File: crates/bizup-infrastructure/src/database/sqlite/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::SqlitePool;

use bizup_core::domain::Menu;
use bizup_core::error::DomainError;
use bizup_core::repositories::MenuRepository;

use super::{catalog_queries as q, db_error};

pub struct SqliteMenuRepository {
    pool: SqlitePool,
}

impl SqliteMenuRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for SqliteMenuRepository {
    async fn list(&self) -> Result<Vec<Menu>, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| db_error("acquiring connection", e))?;
        q::list_menus(&mut conn).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Menu>, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| db_error("acquiring connection", e))?;
        q::find_menu_by_name(&mut conn, name).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| db_error("acquiring connection", e))?;
        q::delete_menu(&mut conn, id).await
    }
}
