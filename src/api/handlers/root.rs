/*
 * Responsibility
 * - GET / (固定の status payload を返す)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::status::StatusPayload;

pub async fn root() -> impl IntoResponse {
    tracing::info!("We have a visitor.");
    (StatusCode::OK, Json(StatusPayload::new()))
}
