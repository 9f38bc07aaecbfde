//! Out-of-stock analytics and restock

use axum::{
    extract::{Path, Query, State},
    Json,
};

use bizup_core::{InventoryItemWithStatus, OutOfStockItem, OutOfStockMenu};

use super::today;
use crate::dto::RestockQuery;
use crate::response::{ApiResult, MessageResponse};
use crate::state::AppState;

pub async fn items(State(state): State<AppState>) -> ApiResult<Json<Vec<OutOfStockItem>>> {
    Ok(Json(state.out_of_stock.items(today()).await?))
}

pub async fn menus(State(state): State<AppState>) -> ApiResult<Json<Vec<OutOfStockMenu>>> {
    Ok(Json(state.out_of_stock.menus(today()).await?))
}

/// POST /out-of-stock/{id}/restock?quantity=
pub async fn restock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<RestockQuery>,
) -> ApiResult<Json<MessageResponse<InventoryItemWithStatus>>> {
    let item = state.inventory.restock(id, query.quantity, today()).await?;
    Ok(Json(MessageResponse::new("Restock completed", item)))
}
