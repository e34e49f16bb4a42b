//! Entities and request payloads for the todo API.
//!
//! # Design
//! Entities are what the store hands back and what the server serializes.
//! Payload fields are all `Option` so the resources, not serde, decide what
//! "blank" means: a missing field on create is reported as a validation
//! failure instead of a deserialization error. On update, `None` means "not
//! supplied" and keeps the stored value, while `Some("")` is an explicit
//! clear and fails validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a todo, assigned by the store.
pub type TodoId = u64;

/// Identifier of an item, assigned by the store.
pub type ItemId = u64;

/// A todo list owning zero or more items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single task scoped to exactly one todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub done: bool,
    pub todo_id: TodoId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl CreateTodo {
    pub fn new(title: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            created_by: Some(created_by.into()),
        }
    }
}

/// Request payload for a partial todo update. Only the fields present in the
/// JSON are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Request payload for creating an item. `done` defaults to `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl CreateItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            done: None,
        }
    }
}

/// Request payload for a partial item update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}
