// ============================================================================
// Bizup Core - Store Settings
// File: crates/bizup-core/src/domain/store.rs
// Description: Singleton store profile and notification toggles
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_STORE_NAME: &str = "Our Cafe";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreProfile {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Store profile fields written on create-or-update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDraft {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl Default for StoreDraft {
    fn default() -> Self {
        Self {
            name: DEFAULT_STORE_NAME.to_string(),
            address: Some(String::new()),
            phone: Some(String::new()),
        }
    }
}

impl From<&StoreProfile> for StoreDraft {
    fn from(profile: &StoreProfile) -> Self {
        Self {
            name: profile.name.clone(),
            address: profile.address.clone(),
            phone: profile.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct StorePatch {
    #[validate(length(min = 1, max = 100, message = "Store name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl StorePatch {
    pub fn apply(self, draft: &mut StoreDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(address) = self.address {
            draft.address = Some(address);
        }
        if let Some(phone) = self.phone {
            draft.phone = Some(phone);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub id: i64,
    #[serde(flatten)]
    pub flags: NotificationFlags,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationFlags {
    #[serde(default = "enabled")]
    pub low_stock: bool,
    #[serde(default = "enabled")]
    pub out_of_stock: bool,
    #[serde(default = "enabled")]
    pub order_reminder: bool,
    #[serde(default)]
    pub daily_report: bool,
}

fn enabled() -> bool {
    true
}

impl Default for NotificationFlags {
    fn default() -> Self {
        Self {
            low_stock: true,
            out_of_stock: true,
            order_reminder: true,
            daily_report: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_onto_default_draft() {
        let mut draft = StoreDraft::default();
        StorePatch {
            phone: Some("02-123-4567".to_string()),
            ..StorePatch::default()
        }
        .apply(&mut draft);

        assert_eq!(draft.name, DEFAULT_STORE_NAME);
        assert_eq!(draft.phone.as_deref(), Some("02-123-4567"));
    }

    #[test]
    fn test_missing_flags_take_defaults() {
        let flags: NotificationFlags = serde_json::from_str(r#"{"daily_report": true}"#).unwrap();
        assert!(flags.low_stock && flags.out_of_stock && flags.order_reminder);
        assert!(flags.daily_report);
    }
}
