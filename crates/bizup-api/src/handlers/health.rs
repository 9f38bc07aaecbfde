use axum::{http::StatusCode, Json};
use serde::Serialize;

use bizup_shared::constants::SERVICE_NAME;

#[derive(Serialize)]
pub struct BannerResponse {
    message: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}
