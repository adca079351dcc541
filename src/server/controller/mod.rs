//! HTTP request handlers.
//!
//! Controllers convert request DTOs to validated params, call a service, and wrap the
//! result in the shared response envelope. Role checks happen in route-table middleware
//! before a handler runs, which hands the authenticated `User` over through request
//! extensions.

pub mod admin;
pub mod auth;
pub mod trainer;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::model::api::ApiResponse;

/// Wraps `data` in the success envelope.
pub(crate) fn respond<T: Serialize>(status: StatusCode, message: &str, data: T) -> Response {
    (
        status,
        Json(ApiResponse::new(status.as_u16(), message, Some(data))),
    )
        .into_response()
}

/// Success envelope without a payload.
pub(crate) fn respond_message(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ApiResponse::<()>::new(status.as_u16(), message, None)),
    )
        .into_response()
}

/// GET /test - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(json!({ "success": true }))
}
