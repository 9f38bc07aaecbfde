use axum::{extract::State, Json};
use validator::Validate;

use super::today;
use crate::dto::{SalesRequest, SalesResponse};
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /sales/receive
///
/// Rejected as a whole with 409 while the inventory holds uninitialized
/// items; otherwise every event gets its own result.
pub async fn receive(
    State(state): State<AppState>,
    Json(payload): Json<SalesRequest>,
) -> ApiResult<Json<SalesResponse>> {
    payload.validate()?;
    let results = state.sales.process_batch(&payload.sales, today()).await?;
    Ok(Json(SalesResponse { results }))
}
