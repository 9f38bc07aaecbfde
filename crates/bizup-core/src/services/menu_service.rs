// ============================================================================
// Bizup Core - Menu Service
// File: crates/bizup-core/src/services/menu_service.rs
// ============================================================================

use std::sync::Arc;

use tracing::info;

use crate::domain::Menu;
use crate::error::DomainError;
use crate::repositories::MenuRepository;

pub struct MenuService<R: MenuRepository> {
    repo: Arc<R>,
}

impl<R: MenuRepository> MenuService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Menu>, DomainError> {
        self.repo.list().await
    }

    pub async fn get(&self, name: &str) -> Result<Menu, DomainError> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::MenuNotFound(name.to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::MenuNotFound(id.to_string()));
        }
        info!(id, "Menu deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockMenuRepository;

    #[tokio::test]
    async fn test_get_unknown_menu() {
        let mut repo = MockMenuRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        let service = MenuService::new(Arc::new(repo));

        let err = service.get("Frappe").await.unwrap_err();
        assert!(matches!(err, DomainError::MenuNotFound(name) if name == "Frappe"));
    }

    #[tokio::test]
    async fn test_delete_existing_menu() {
        let mut repo = MockMenuRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(true));
        let service = MenuService::new(Arc::new(repo));
        assert!(service.delete(3).await.is_ok());
    }
}
