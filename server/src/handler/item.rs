//! Item handlers. Each one answers 404 "Couldn't find Todo ..." when
//! `todo_id` does not resolve, before looking at the item id or the body.

use axum::extract::{Path, State};
use todo_core::{CreateItem, Item, ItemId, NotFound, Outcome, ResourceError, TodoId, UpdateItem};

use crate::{
    error::{AppError, Reply},
    extract::{self, Payload},
    AppState,
};

/// Parses the item segment. A segment that is not an id is an unknown item,
/// reported only once the parent is known to exist.
fn item_id(state: &AppState, todo_id: TodoId, raw: &str) -> Result<ItemId, ResourceError> {
    match extract::id(raw) {
        Some(id) => Ok(id),
        None => {
            state.items.resolve_parent(todo_id)?;
            Err(NotFound::item(todo_id, raw).into())
        }
    }
}

/// GET /todos/{todo_id}/items
#[tracing::instrument(skip_all, fields(todo_id = %todo_id))]
pub async fn list(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<Reply<Vec<Item>>, AppError> {
    let todo_id = extract::todo_id(&todo_id)?;
    Ok(state.items.list(todo_id)?.into())
}

/// GET /todos/{todo_id}/items/{id}
#[tracing::instrument(skip_all, fields(todo_id = %todo_id, item_id = %id))]
pub async fn show(
    State(state): State<AppState>,
    Path((todo_id, id)): Path<(String, String)>,
) -> Result<Reply<Item>, AppError> {
    let todo_id = extract::todo_id(&todo_id)?;
    let id = item_id(&state, todo_id, &id)?;
    Ok(state.items.get(todo_id, id)?.into())
}

/// POST /todos/{todo_id}/items
#[tracing::instrument(skip_all, fields(todo_id = %todo_id))]
pub async fn create(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
    input: Payload<CreateItem>,
) -> Result<Reply<Item>, AppError> {
    let todo_id = extract::todo_id(&todo_id)?;
    let input = input.after(|| state.items.resolve_parent(todo_id))?;
    Ok(state.items.create(todo_id, input)?.into())
}

/// PUT /todos/{todo_id}/items/{id}
#[tracing::instrument(skip_all, fields(todo_id = %todo_id, item_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path((todo_id, id)): Path<(String, String)>,
    input: Payload<UpdateItem>,
) -> Result<Reply<()>, AppError> {
    let todo_id = extract::todo_id(&todo_id)?;
    let id = item_id(&state, todo_id, &id)?;
    let input = input.after(|| state.items.get(todo_id, id))?;
    Ok(state.items.update(todo_id, id, input)?.into())
}

/// DELETE /todos/{todo_id}/items/{id}
///
/// 204 even when `id` does not exist under an existing todo.
#[tracing::instrument(skip_all, fields(todo_id = %todo_id, item_id = %id))]
pub async fn destroy(
    State(state): State<AppState>,
    Path((todo_id, id)): Path<(String, String)>,
) -> Result<Reply<()>, AppError> {
    let todo_id = extract::todo_id(&todo_id)?;
    match extract::id(&id) {
        Some(id) => Ok(state.items.delete(todo_id, id)?.into()),
        None => {
            state.items.resolve_parent(todo_id)?;
            Ok(Reply(Outcome::NoContent))
        }
    }
}
