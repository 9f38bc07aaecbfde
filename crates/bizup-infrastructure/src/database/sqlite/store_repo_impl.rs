// ============================================================================
// Bizup Infrastructure - SQLite Store Settings Repository
// File: crates/bizup-infrastructure/src/database/sqlite/store_repo_impl.rs
// ============================================================================
//! Singleton rows: the lowest id is the live one.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use bizup_core::domain::{NotificationFlags, NotificationSettings, StoreDraft, StoreProfile};
use bizup_core::error::DomainError;
use bizup_core::repositories::StoreRepository;

use super::db_error;
use super::rows::{NotificationRow, StoreRow};

pub struct SqliteStoreRepository {
    pool: SqlitePool,
}

impl SqliteStoreRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for SqliteStoreRepository {
    async fn find_profile(&self) -> Result<Option<StoreProfile>, DomainError> {
        let row: Option<StoreRow> = sqlx::query_as(
            "SELECT id, name, address, phone, created_at, updated_at FROM stores ORDER BY id LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding store profile", e))?;

        Ok(row.map(Into::into))
    }

    async fn save_profile(&self, draft: &StoreDraft) -> Result<StoreProfile, DomainError> {
        let now = Utc::now();
        match self.find_profile().await? {
            Some(existing) => {
                sqlx::query("UPDATE stores SET name = ?, address = ?, phone = ?, updated_at = ? WHERE id = ?")
                    .bind(&draft.name)
                    .bind(&draft.address)
                    .bind(&draft.phone)
                    .bind(now)
                    .bind(existing.id)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| db_error("updating store profile", e))?;
            }
            None => {
                sqlx::query(
                    "INSERT INTO stores (name, address, phone, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
                )
                .bind(&draft.name)
                .bind(&draft.address)
                .bind(&draft.phone)
                .bind(now)
                .bind(now)
                .execute(&self.pool)
                .await
                .map_err(|e| db_error("creating store profile", e))?;
            }
        }

        self.find_profile()
            .await?
            .ok_or_else(|| DomainError::InternalError("Store profile missing after save".to_string()))
    }

    async fn find_notifications(&self) -> Result<Option<NotificationSettings>, DomainError> {
        let row: Option<NotificationRow> = sqlx::query_as(
            r#"
            SELECT id, low_stock, out_of_stock, order_reminder, daily_report, created_at, updated_at
            FROM notification_settings
            ORDER BY id
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding notification settings", e))?;

        Ok(row.map(Into::into))
    }

    async fn save_notifications(
        &self,
        flags: &NotificationFlags,
    ) -> Result<NotificationSettings, DomainError> {
        let now = Utc::now();
        match self.find_notifications().await? {
            Some(existing) => {
                sqlx::query(
                    r#"
                    UPDATE notification_settings
                    SET low_stock = ?, out_of_stock = ?, order_reminder = ?, daily_report = ?,
                        updated_at = ?
                    WHERE id = ?
                    "#,
                )
                .bind(flags.low_stock)
                .bind(flags.out_of_stock)
                .bind(flags.order_reminder)
                .bind(flags.daily_report)
                .bind(now)
                .bind(existing.id)
                .execute(&self.pool)
                .await
                .map_err(|e| db_error("updating notification settings", e))?;
            }
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO notification_settings (
                        low_stock, out_of_stock, order_reminder, daily_report, created_at, updated_at
                    )
                    VALUES (?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(flags.low_stock)
                .bind(flags.out_of_stock)
                .bind(flags.order_reminder)
                .bind(flags.daily_report)
                .bind(now)
                .bind(now)
                .execute(&self.pool)
                .await
                .map_err(|e| db_error("creating notification settings", e))?;
            }
        }

        self.find_notifications().await?.ok_or_else(|| {
            DomainError::InternalError("Notification settings missing after save".to_string())
        })
    }
}
