//! In-memory `Store` backed by ordered maps.
//!
//! Identifiers come from per-kind sequences starting at 1 and are never
//! reused, so iterating a `BTreeMap` by key yields insertion order.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::store::{ItemDraft, Store, StoreError, TodoDraft};
use crate::types::{Item, ItemId, Todo, TodoId};

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    todos: BTreeMap<TodoId, Todo>,
    items: BTreeMap<ItemId, Item>,
    last_todo_id: TodoId,
    last_item_id: ItemId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Store for MemoryStore {
    fn insert_todo(&self, draft: TodoDraft) -> Result<Todo, StoreError> {
        let mut tables = self.write()?;
        tables.last_todo_id += 1;
        let now = Utc::now();
        let todo = Todo {
            id: tables.last_todo_id,
            title: draft.title,
            created_by: draft.created_by,
            created_at: now,
            updated_at: now,
        };
        tables.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    fn find_todo(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        Ok(self.read()?.todos.get(&id).cloned())
    }

    fn list_todos(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.read()?.todos.values().cloned().collect())
    }

    fn update_todo(&self, todo: &Todo) -> Result<Option<Todo>, StoreError> {
        let mut tables = self.write()?;
        let Some(stored) = tables.todos.get_mut(&todo.id) else {
            return Ok(None);
        };
        stored.title = todo.title.clone();
        stored.created_by = todo.created_by.clone();
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    fn delete_todo(&self, id: TodoId) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        // Children first, then the parent, under one write lock.
        let before = tables.items.len();
        tables.items.retain(|_, item| item.todo_id != id);
        let removed = before - tables.items.len();
        tables.todos.remove(&id);
        Ok(removed)
    }

    fn insert_item(&self, draft: ItemDraft) -> Result<Item, StoreError> {
        let mut tables = self.write()?;
        tables.last_item_id += 1;
        let now = Utc::now();
        let item = Item {
            id: tables.last_item_id,
            name: draft.name,
            done: draft.done,
            todo_id: draft.todo_id,
            created_at: now,
            updated_at: now,
        };
        tables.items.insert(item.id, item.clone());
        Ok(item)
    }

    fn find_item(&self, todo_id: TodoId, id: ItemId) -> Result<Option<Item>, StoreError> {
        Ok(self
            .read()?
            .items
            .get(&id)
            .filter(|item| item.todo_id == todo_id)
            .cloned())
    }

    fn list_items(&self, todo_id: TodoId) -> Result<Vec<Item>, StoreError> {
        Ok(self
            .read()?
            .items
            .values()
            .filter(|item| item.todo_id == todo_id)
            .cloned()
            .collect())
    }

    fn update_item(&self, item: &Item) -> Result<Option<Item>, StoreError> {
        let mut tables = self.write()?;
        let Some(stored) = tables
            .items
            .get_mut(&item.id)
            .filter(|stored| stored.todo_id == item.todo_id)
        else {
            return Ok(None);
        };
        stored.name = item.name.clone();
        stored.done = item.done;
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    fn delete_item(&self, todo_id: TodoId, id: ItemId) -> Result<bool, StoreError> {
        let mut tables = self.write()?;
        let owned = tables
            .items
            .get(&id)
            .is_some_and(|item| item.todo_id == todo_id);
        if owned {
            tables.items.remove(&id);
        }
        Ok(owned)
    }
}
