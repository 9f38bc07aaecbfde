//! Inventory CRUD and status views

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use bizup_core::{InventoryItemWithStatus, InventoryPatch, InventoryStats, NewInventoryItem};

use super::today;
use crate::dto::ListQuery;
use crate::response::{created, ApiResult, Created};
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<InventoryItemWithStatus>>> {
    let items = state
        .inventory
        .list(query.pagination(), query.search.clone())
        .await?;
    Ok(Json(items))
}

pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<InventoryStats>> {
    Ok(Json(state.inventory.stats().await?))
}

pub async fn low_stock(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<InventoryItemWithStatus>>> {
    Ok(Json(state.inventory.low_stock().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<InventoryItemWithStatus>> {
    Ok(Json(state.inventory.get(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewInventoryItem>,
) -> ApiResult<Created<InventoryItemWithStatus>> {
    let item = state.inventory.create(payload, today()).await?;
    Ok(created(item))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<InventoryPatch>,
) -> ApiResult<Json<InventoryItemWithStatus>> {
    Ok(Json(state.inventory.update(id, patch, today()).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.inventory.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
