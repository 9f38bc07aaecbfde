use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use bizup_core::{Contract, ContractPatch, NewContract};

use crate::response::{created, ApiResult, Created};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Contract>>> {
    Ok(Json(state.staff.list_contracts().await?))
}

pub async fn list_for_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> ApiResult<Json<Vec<Contract>>> {
    Ok(Json(state.staff.contracts_for_employee(employee_id).await?))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Contract>> {
    Ok(Json(state.staff.get_contract(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewContract>,
) -> ApiResult<Created<Contract>> {
    let contract = state.staff.create_contract(payload).await?;
    Ok(created(contract))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ContractPatch>,
) -> ApiResult<Json<Contract>> {
    Ok(Json(state.staff.update_contract(id, patch).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.staff.delete_contract(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
