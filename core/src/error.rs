//! Error types for the resources and the API client.
//!
//! # Design
//! `ResourceError` is the whole failure taxonomy of the core: a lookup that
//! did not resolve, a validation failure, or a fault in the store. Only the
//! first two are part of the API contract; store faults surface as 500.
//!
//! `ClientError` is the client-side view of the same contract: 404 and 422
//! responses get dedicated variants carrying the server's message, every
//! other unexpected status lands in `Http`.

use std::fmt;

use thiserror::Error;

use crate::outcome::Status;
use crate::store::StoreError;
use crate::types::TodoId;
use crate::validation::ValidationErrors;

/// A lookup that did not resolve, optionally within a parent scope.
///
/// Renders as `Couldn't find Item with 'id'=4 [todo_id=1]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Couldn't find {kind} with '{key}'={value}{}", scope_suffix(.scope))]
pub struct NotFound {
    pub kind: &'static str,
    pub key: &'static str,
    pub value: String,
    pub scope: Option<String>,
}

impl NotFound {
    /// `id` is rendered as given, so a path segment that is not an id at
    /// all still names the lookup that failed.
    pub fn todo(id: impl fmt::Display) -> Self {
        Self {
            kind: "Todo",
            key: "id",
            value: id.to_string(),
            scope: None,
        }
    }

    pub fn item(todo_id: TodoId, id: impl fmt::Display) -> Self {
        Self {
            kind: "Item",
            key: "id",
            value: id.to_string(),
            scope: Some(format!("todo_id={todo_id}")),
        }
    }
}

fn scope_suffix(scope: &Option<String>) -> String {
    match scope {
        Some(scope) => format!(" [{scope}]"),
        None => String::new(),
    }
}

/// Errors returned by `TodoResource` and `ItemResource`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResourceError {
    pub fn status(&self) -> Status {
        match self {
            ResourceError::NotFound(_) => Status::NotFound,
            ResourceError::Validation(_) => Status::UnprocessableEntity,
            ResourceError::Store(_) => Status::InternalServerError,
        }
    }
}

/// Errors returned by `ApiClient` parse methods.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server returned 404; carries the server's message.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server returned 422; carries the server's message.
    #[error("unprocessable: {0}")]
    Validation(String),

    /// The server returned any other unexpected status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
