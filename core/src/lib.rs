//! Resource core of the todo API.
//!
//! # Overview
//! Todos own items. `TodoResource` and `ItemResource` validate input, enforce
//! that every item operation runs under an existing todo, and report a
//! structured `Outcome` or a typed `ResourceError`, each carrying the status
//! the HTTP layer should answer with.
//!
//! # Design
//! - No HTTP framework and no network I/O. The server crate dispatches
//!   requests in and serializes results out.
//! - Persistence sits behind the `Store` trait and is injected into each
//!   resource; `MemoryStore` is the bundled implementation.
//! - `ApiClient` is a host-does-IO client for the same HTTP surface: it
//!   builds requests and parses responses without executing them.

pub mod client;
pub mod error;
pub mod http;
pub mod memory;
pub mod outcome;
pub mod resource;
pub mod store;
pub mod types;
pub mod validation;

pub use client::ApiClient;
pub use error::{ClientError, NotFound, ResourceError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use memory::MemoryStore;
pub use outcome::{Outcome, Status};
pub use resource::{resources, ItemResource, TodoResource};
pub use store::{ItemDraft, Store, StoreError, TodoDraft};
pub use types::{CreateItem, CreateTodo, ErrorBody, Item, ItemId, Todo, TodoId, UpdateItem, UpdateTodo};
pub use validation::{ValidationErrors, Violation};
