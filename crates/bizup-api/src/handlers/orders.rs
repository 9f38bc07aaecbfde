use axum::{extract::State, Json};
use validator::Validate;

use bizup_core::{Order, OrderRecommendation};

use crate::dto::OrderRequest;
use crate::response::{created, ApiResult, Created};
use crate::state::AppState;

pub async fn recommendations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<OrderRecommendation>>> {
    Ok(Json(state.orders.recommendations().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<OrderRequest>,
) -> ApiResult<Created<Order>> {
    payload.validate()?;
    let order = state.orders.create_order(payload.items).await?;
    Ok(created(order))
}
