//! Mapping from core outcomes and errors to HTTP responses.
//!
//! | core result | HTTP status |
//! |-------------|-------------|
//! | `Outcome::Ok` | 200 + JSON body |
//! | `Outcome::Created` | 201 + JSON body |
//! | `Outcome::NoContent` | 204, empty |
//! | `ResourceError::NotFound` | 404 `{"message": ...}` |
//! | `ResourceError::Validation` | 422 `{"message": ...}` |
//! | `ResourceError::Store` | 500 `{"message": "Internal server error"}` |
//! | `AppError::Body` | 422 `{"message": "Validation failed: ..."}` |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::{ErrorBody, Outcome, ResourceError, Status};

pub fn status_code(status: Status) -> StatusCode {
    match status {
        Status::Ok => StatusCode::OK,
        Status::Created => StatusCode::CREATED,
        Status::NoContent => StatusCode::NO_CONTENT,
        Status::NotFound => StatusCode::NOT_FOUND,
        Status::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        Status::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Successful handler response.
#[derive(Debug)]
pub struct Reply<T>(pub Outcome<T>);

impl<T> From<Outcome<T>> for Reply<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Self(outcome)
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        let status = status_code(self.0.status());
        match self.0.into_body() {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

/// Failed handler response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// The request body is present but is not a payload of the expected shape.
    #[error("Validation failed: Request body is malformed ({0})")]
    Body(String),
}

impl AppError {
    pub fn status(&self) -> Status {
        match self {
            AppError::Resource(err) => err.status(),
            AppError::Body(_) => Status::UnprocessableEntity,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_code(self.status());
        let message = match &self {
            AppError::Resource(ResourceError::Store(err)) => {
                // The cause stays in the logs.
                tracing::error!(error = %err, "store failure");
                "Internal server error".to_string()
            }
            other => {
                tracing::debug!(%status, message = %other, "request rejected");
                other.to_string()
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}
