//! Store settings repository trait (port)
//!
//! Both the store profile and the notification settings are singletons.

use async_trait::async_trait;

use crate::domain::{NotificationFlags, NotificationSettings, StoreDraft, StoreProfile};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn find_profile(&self) -> Result<Option<StoreProfile>, DomainError>;
    /// Inserts the singleton row or overwrites it.
    async fn save_profile(&self, draft: &StoreDraft) -> Result<StoreProfile, DomainError>;
    async fn find_notifications(&self) -> Result<Option<NotificationSettings>, DomainError>;
    async fn save_notifications(
        &self,
        flags: &NotificationFlags,
    ) -> Result<NotificationSettings, DomainError>;
}
