//! HTTP surface of the todo API.
//!
//! Routes parsed requests into `todo_core`'s resources and renders their
//! outcomes and errors as JSON responses. All state lives in `AppState`,
//! which is built from an injected `Store`.

pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod telemetry;

use std::sync::Arc;

use axum::{routing::get, Router};
use todo_core::{resources, ItemResource, MemoryStore, Store, TodoResource};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::handler::{item, todo};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub todos: TodoResource,
    pub items: ItemResource,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        let (todos, items) = resources(store);
        Self { todos, items }
    }
}

/// Router over a fresh in-memory store.
pub fn app() -> Router {
    router(AppState::new(Arc::new(MemoryStore::new())))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/todos", get(todo::list).post(todo::create))
        .route(
            "/todos/{id}",
            get(todo::show).put(todo::update).delete(todo::destroy),
        )
        .route("/todos/{todo_id}/items", get(item::list).post(item::create))
        .route(
            "/todos/{todo_id}/items/{id}",
            get(item::show).put(item::update).delete(item::destroy),
        )
        .fallback(handler::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
