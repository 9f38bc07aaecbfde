//! Response helpers shared by the handlers

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// `201 Created` with a JSON body.
pub type Created<T> = (StatusCode, Json<T>);

pub fn created<T: Serialize>(body: T) -> Created<T> {
    (StatusCode::CREATED, Json(body))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: String,
    pub item: T,
}

impl<T: Serialize> MessageResponse<T> {
    pub fn new(message: impl Into<String>, item: T) -> Self {
        Self {
            message: message.into(),
            item,
        }
    }
}
