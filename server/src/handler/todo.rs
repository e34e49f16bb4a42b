//! Todo handlers for `/todos` and `/todos/{id}`.

use axum::extract::{Path, State};
use todo_core::{CreateTodo, Todo, UpdateTodo};

use crate::{
    error::{AppError, Reply},
    extract::{self, Payload},
    AppState,
};

/// GET /todos
#[tracing::instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Reply<Vec<Todo>>, AppError> {
    Ok(state.todos.list()?.into())
}

/// GET /todos/{id}
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Reply<Todo>, AppError> {
    let id = extract::todo_id(&id)?;
    Ok(state.todos.get(id)?.into())
}

/// POST /todos
///
/// 201 with the new todo, 422 if `title` or `created_by` is blank.
#[tracing::instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    input: Payload<CreateTodo>,
) -> Result<Reply<Todo>, AppError> {
    Ok(state.todos.create(input.into_inner()?)?.into())
}

/// PUT /todos/{id}
///
/// Partial update. 204 on success, 404 for an unknown id whatever the body,
/// 422 if the body is malformed or the result would be invalid.
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    input: Payload<UpdateTodo>,
) -> Result<Reply<()>, AppError> {
    let id = extract::todo_id(&id)?;
    let input = input.after(|| state.todos.find(id))?;
    Ok(state.todos.update(id, input)?.into())
}

/// DELETE /todos/{id}
///
/// Removes the todo and all of its items.
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Reply<()>, AppError> {
    let id = extract::todo_id(&id)?;
    Ok(state.todos.delete(id)?.into())
}
