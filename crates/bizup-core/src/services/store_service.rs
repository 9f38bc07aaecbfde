// ============================================================================
// Bizup Core - Store Settings Service
// File: crates/bizup-core/src/services/store_service.rs
// ============================================================================

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::{NotificationFlags, NotificationSettings, StoreDraft, StorePatch, StoreProfile};
use crate::error::DomainError;
use crate::repositories::StoreRepository;

pub struct StoreService<R: StoreRepository> {
    repo: Arc<R>,
}

impl<R: StoreRepository> StoreService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Creates the default profile on first read.
    pub async fn profile(&self) -> Result<StoreProfile, DomainError> {
        match self.repo.find_profile().await? {
            Some(profile) => Ok(profile),
            None => {
                info!("Creating default store profile");
                self.repo.save_profile(&StoreDraft::default()).await
            }
        }
    }

    pub async fn update_profile(&self, patch: StorePatch) -> Result<StoreProfile, DomainError> {
        patch.validate()?;
        let mut draft = match self.repo.find_profile().await? {
            Some(profile) => StoreDraft::from(&profile),
            None => StoreDraft::default(),
        };
        patch.apply(&mut draft);
        self.repo.save_profile(&draft).await
    }

    /// Creates the default settings on first read.
    pub async fn notifications(&self) -> Result<NotificationSettings, DomainError> {
        match self.repo.find_notifications().await? {
            Some(settings) => Ok(settings),
            None => self
                .repo
                .save_notifications(&NotificationFlags::default())
                .await,
        }
    }

    pub async fn update_notifications(
        &self,
        flags: NotificationFlags,
    ) -> Result<NotificationSettings, DomainError> {
        self.repo.save_notifications(&flags).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::DEFAULT_STORE_NAME;
    use crate::repositories::MockStoreRepository;
    use chrono::Utc;

    fn profile_from(draft: &StoreDraft) -> StoreProfile {
        let now = Utc::now();
        StoreProfile {
            id: 1,
            name: draft.name.clone(),
            address: draft.address.clone(),
            phone: draft.phone.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_profile_created_lazily() {
        let mut repo = MockStoreRepository::new();
        repo.expect_find_profile().returning(|| Ok(None));
        repo.expect_save_profile()
            .times(1)
            .returning(|draft| Ok(profile_from(draft)));

        let service = StoreService::new(Arc::new(repo));
        let profile = service.profile().await.unwrap();
        assert_eq!(profile.name, DEFAULT_STORE_NAME);
        assert_eq!(profile.address.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_update_profile_keeps_unset_fields() {
        let mut repo = MockStoreRepository::new();
        repo.expect_find_profile().returning(|| {
            Ok(Some(profile_from(&StoreDraft {
                name: "Bean There".to_string(),
                address: Some("Busan".to_string()),
                phone: None,
            })))
        });
        repo.expect_save_profile()
            .withf(|draft| draft.name == "Bean There" && draft.phone.as_deref() == Some("051-000"))
            .returning(|draft| Ok(profile_from(draft)));

        let service = StoreService::new(Arc::new(repo));
        let profile = service
            .update_profile(StorePatch {
                phone: Some("051-000".to_string()),
                ..StorePatch::default()
            })
            .await
            .unwrap();
        assert_eq!(profile.address.as_deref(), Some("Busan"));
    }

    #[tokio::test]
    async fn test_notifications_default() {
        let mut repo = MockStoreRepository::new();
        repo.expect_find_notifications().returning(|| Ok(None));
        repo.expect_save_notifications().returning(|flags| {
            let now = Utc::now();
            Ok(NotificationSettings {
                id: 1,
                flags: *flags,
                created_at: now,
                updated_at: now,
            })
        });

        let service = StoreService::new(Arc::new(repo));
        let settings = service.notifications().await.unwrap();
        assert!(settings.flags.low_stock);
        assert!(!settings.flags.daily_report);
    }
}
