//! Persistence seam for the resources.
//!
//! # Design
//! The resources own validation and status mapping; the store only keeps
//! rows. It assigns identifiers and timestamps, scopes item lookups by their
//! parent, and deletes a todo's items together with the todo. Lookups return
//! `Option` and leave "not found" wording to the caller.

use std::fmt;

use thiserror::Error;

use crate::types::{Item, ItemId, Todo, TodoId};

/// Failure inside the store itself. Never part of the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    Poisoned,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Validated attributes of a todo about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub created_by: String,
}

/// Validated attributes of an item about to be inserted under `todo_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub todo_id: TodoId,
    pub name: String,
    pub done: bool,
}

pub trait Store: Send + Sync + fmt::Debug {
    fn insert_todo(&self, draft: TodoDraft) -> Result<Todo, StoreError>;

    fn find_todo(&self, id: TodoId) -> Result<Option<Todo>, StoreError>;

    /// All todos in insertion order.
    fn list_todos(&self) -> Result<Vec<Todo>, StoreError>;

    /// Persists the mutable attributes of `todo` and refreshes `updated_at`.
    /// Returns `None` if the todo no longer exists.
    fn update_todo(&self, todo: &Todo) -> Result<Option<Todo>, StoreError>;

    /// Deletes the todo and every item it owns. Returns the number of items
    /// removed alongside it.
    fn delete_todo(&self, id: TodoId) -> Result<usize, StoreError>;

    fn insert_item(&self, draft: ItemDraft) -> Result<Item, StoreError>;

    /// Finds `id` only if it belongs to `todo_id`.
    fn find_item(&self, todo_id: TodoId, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Items owned by `todo_id` in insertion order.
    fn list_items(&self, todo_id: TodoId) -> Result<Vec<Item>, StoreError>;

    fn update_item(&self, item: &Item) -> Result<Option<Item>, StoreError>;

    /// Returns whether a row was removed.
    fn delete_item(&self, todo_id: TodoId, id: ItemId) -> Result<bool, StoreError>;
}
