use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use bizup_core::{Employee, EmployeePatch, NewEmployee};

use super::today;
use crate::response::{created, ApiResult, Created};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(state.staff.list_employees().await?))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Employee>> {
    Ok(Json(state.staff.get_employee(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewEmployee>,
) -> ApiResult<Created<Employee>> {
    let employee = state.staff.create_employee(payload, today()).await?;
    Ok(created(employee))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<EmployeePatch>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.staff.update_employee(id, patch).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.staff.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
