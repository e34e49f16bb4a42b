//! Resource handlers: the validation and status contract for todos and
//! their nested items.
//!
//! `ItemResource` holds a `TodoResource` only to resolve parents; it never
//! calls its mutating operations.

mod item;
mod todo;

use std::sync::Arc;

pub use item::ItemResource;
pub use todo::TodoResource;

use crate::store::Store;

/// Builds both resources over one shared store.
pub fn resources(store: Arc<dyn Store>) -> (TodoResource, ItemResource) {
    let todos = TodoResource::new(Arc::clone(&store));
    let items = ItemResource::new(todos.clone(), store);
    (todos, items)
}
