//! Store profile and notification settings

use axum::{extract::State, Json};

use bizup_core::{NotificationFlags, NotificationSettings, StorePatch, StoreProfile};

use crate::response::ApiResult;
use crate::state::AppState;

pub async fn get_profile(State(state): State<AppState>) -> ApiResult<Json<StoreProfile>> {
    Ok(Json(state.store.profile().await?))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(patch): Json<StorePatch>,
) -> ApiResult<Json<StoreProfile>> {
    Ok(Json(state.store.update_profile(patch).await?))
}

pub async fn get_notifications(
    State(state): State<AppState>,
) -> ApiResult<Json<NotificationSettings>> {
    Ok(Json(state.store.notifications().await?))
}

pub async fn update_notifications(
    State(state): State<AppState>,
    Json(flags): Json<NotificationFlags>,
) -> ApiResult<Json<NotificationSettings>> {
    Ok(Json(state.store.update_notifications(flags).await?))
}
