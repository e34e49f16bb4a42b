//! Request handlers.
//!
//! - `GET /health` - liveness check
//! - `/todos` and `/todos/{id}` - see [`todo`]
//! - `/todos/{todo_id}/items` and `/todos/{todo_id}/items/{id}` - see [`item`]

pub mod item;
pub mod todo;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use todo_core::ErrorBody;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Fallback for unrouted paths.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: "Resource not found".to_string(),
        }),
    )
}
