//! Request and response payloads that exist only at the HTTP boundary

use serde::{Deserialize, Serialize};
use validator::Validate;

use bizup_core::services::ReconcileMode;
use bizup_core::{OrderRequestLine, SaleEvent, SaleOutcome};
use bizup_shared::constants::DEFAULT_PAGE_SIZE;
use bizup_shared::types::Pagination;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub username: String,
}

impl LoginResponse {
    pub fn bearer(access_token: String, username: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            username,
        }
    }
}

/// `?skip=&limit=&search=` on the inventory listing
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(
            self.skip.unwrap_or(0),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    #[serde(default)]
    pub mode: ReconcileMode,
}

#[derive(Debug, Deserialize)]
pub struct RestockQuery {
    pub quantity: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SalesRequest {
    #[validate(nested)]
    pub sales: Vec<SaleEvent>,
}

#[derive(Debug, Serialize)]
pub struct SalesResponse {
    pub results: Vec<SaleOutcome>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct OrderRequest {
    #[validate(length(min = 1, message = "At least one order line is required"), nested)]
    pub items: Vec<OrderRequestLine>,
}
