//! Item operations scoped to a parent todo. The parent is resolved first,
//! so an unknown todo is reported before anything about the item.

use std::sync::Arc;

use crate::error::{NotFound, ResourceError};
use crate::outcome::Outcome;
use crate::resource::TodoResource;
use crate::store::{ItemDraft, Store};
use crate::types::{CreateItem, Item, ItemId, Todo, TodoId, UpdateItem};
use crate::validation::ValidationErrors;

/// Lifecycle of items nested under a todo.
///
/// Every operation resolves the parent first. A missing parent is reported
/// as `Couldn't find Todo ...` and no item lookup or validation happens.
#[derive(Debug, Clone)]
pub struct ItemResource {
    todos: TodoResource,
    store: Arc<dyn Store>,
}

impl ItemResource {
    pub fn new(todos: TodoResource, store: Arc<dyn Store>) -> Self {
        Self { todos, store }
    }

    pub fn resolve_parent(&self, todo_id: TodoId) -> Result<Todo, ResourceError> {
        self.todos.find(todo_id)
    }

    pub fn list(&self, todo_id: TodoId) -> Result<Outcome<Vec<Item>>, ResourceError> {
        self.resolve_parent(todo_id)?;
        Ok(Outcome::Ok(self.store.list_items(todo_id)?))
    }

    pub fn get(&self, todo_id: TodoId, id: ItemId) -> Result<Outcome<Item>, ResourceError> {
        self.resolve_parent(todo_id)?;
        self.find(todo_id, id).map(Outcome::Ok)
    }

    pub fn create(&self, todo_id: TodoId, attrs: CreateItem) -> Result<Outcome<Item>, ResourceError> {
        self.resolve_parent(todo_id)?;
        let draft = ItemDraft {
            todo_id,
            name: attrs.name.unwrap_or_default(),
            done: attrs.done.unwrap_or(false),
        };
        validate(&draft.name)?;

        let item = self.store.insert_item(draft)?;
        tracing::debug!(todo_id, item_id = item.id, "item created");
        Ok(Outcome::Created(item))
    }

    pub fn update(
        &self,
        todo_id: TodoId,
        id: ItemId,
        attrs: UpdateItem,
    ) -> Result<Outcome<()>, ResourceError> {
        self.resolve_parent(todo_id)?;
        let mut item = self.find(todo_id, id)?;
        if let Some(name) = attrs.name {
            item.name = name;
        }
        if let Some(done) = attrs.done {
            item.done = done;
        }
        validate(&item.name)?;

        if self.store.update_item(&item)?.is_none() {
            return Err(NotFound::item(todo_id, id).into());
        }
        tracing::debug!(todo_id, item_id = id, "item updated");
        Ok(Outcome::NoContent)
    }

    /// Deleting an id that does not exist under an existing todo still
    /// succeeds.
    pub fn delete(&self, todo_id: TodoId, id: ItemId) -> Result<Outcome<()>, ResourceError> {
        self.resolve_parent(todo_id)?;
        let removed = self.store.delete_item(todo_id, id)?;
        tracing::debug!(todo_id, item_id = id, removed, "item deleted");
        Ok(Outcome::NoContent)
    }

    fn find(&self, todo_id: TodoId, id: ItemId) -> Result<Item, ResourceError> {
        match self.store.find_item(todo_id, id)? {
            Some(item) => Ok(item),
            None => {
                tracing::debug!(todo_id, item_id = id, "item not found");
                Err(NotFound::item(todo_id, id).into())
            }
        }
    }
}

fn validate(name: &str) -> Result<(), ValidationErrors> {
    let result = ValidationErrors::new().require("Name", name).into_result();
    if let Err(errors) = &result {
        tracing::debug!(%errors, "item rejected");
    }
    result
}
