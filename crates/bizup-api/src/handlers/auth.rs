//! Admin login

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use crate::dto::{LoginRequest, LoginResponse};
use crate::error::ApiError;
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    payload.validate()?;

    if !state.credentials.verify(&payload.username, &payload.password) {
        return Err(ApiError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    info!("Admin logged in: {}", payload.username);
    let token = state.tokens.issue(&payload.username);
    Ok(Json(LoginResponse::bearer(token, payload.username)))
}
