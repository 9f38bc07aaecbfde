//! Menu CSV upload and menu read/delete

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use bizup_core::services::UploadOutcome;
use bizup_core::Menu;

use super::today;
use crate::dto::UploadQuery;
use crate::error::ApiError;
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /menus/upload-csv?mode=add|reset, multipart field `file`.
///
/// Reconciliation problems come back as `success: false` in a 200 body;
/// only a missing or unreadable form part is a 400.
pub async fn upload_csv(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadOutcome>> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read field: {}", e)))?
    {
        if field.name() == Some("file") {
            filename = field.file_name().map(|s| s.to_string());
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?
                    .to_vec(),
            );
        }
    }

    let file_data = file_data.ok_or_else(|| ApiError::BadRequest("file required".to_string()))?;
    info!(
        mode = query.mode.as_str(),
        bytes = file_data.len(),
        "Menu CSV upload received: {}",
        filename.as_deref().unwrap_or("<unnamed>")
    );

    let outcome = state
        .menu_uploads
        .upload(&file_data, query.mode, today())
        .await;
    Ok(Json(outcome))
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Menu>>> {
    Ok(Json(state.menus.list().await?))
}

pub async fn get(State(state): State<AppState>, Path(name): Path<String>) -> ApiResult<Json<Menu>> {
    Ok(Json(state.menus.get(&name).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.menus.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
