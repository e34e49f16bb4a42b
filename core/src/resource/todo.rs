//! Todo operations over an injected store. `title` and `created_by` must
//! not be blank, and deleting a todo removes its items.

use std::sync::Arc;

use crate::error::{NotFound, ResourceError};
use crate::outcome::Outcome;
use crate::store::{Store, TodoDraft};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};
use crate::validation::ValidationErrors;

/// Lifecycle of the parent collection.
#[derive(Debug, Clone)]
pub struct TodoResource {
    store: Arc<dyn Store>,
}

impl TodoResource {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Outcome<Vec<Todo>>, ResourceError> {
        Ok(Outcome::Ok(self.store.list_todos()?))
    }

    /// Resolves `id` or fails with a `Todo` not-found error. This is the
    /// only capability `ItemResource` uses.
    pub fn find(&self, id: TodoId) -> Result<Todo, ResourceError> {
        match self.store.find_todo(id)? {
            Some(todo) => Ok(todo),
            None => {
                tracing::debug!(todo_id = id, "todo not found");
                Err(NotFound::todo(id).into())
            }
        }
    }

    pub fn get(&self, id: TodoId) -> Result<Outcome<Todo>, ResourceError> {
        self.find(id).map(Outcome::Ok)
    }

    pub fn create(&self, attrs: CreateTodo) -> Result<Outcome<Todo>, ResourceError> {
        let draft = TodoDraft {
            title: attrs.title.unwrap_or_default(),
            created_by: attrs.created_by.unwrap_or_default(),
        };
        validate(&draft.title, &draft.created_by)?;

        let todo = self.store.insert_todo(draft)?;
        tracing::debug!(todo_id = todo.id, "todo created");
        Ok(Outcome::Created(todo))
    }

    pub fn update(&self, id: TodoId, attrs: UpdateTodo) -> Result<Outcome<()>, ResourceError> {
        let mut todo = self.find(id)?;
        if let Some(title) = attrs.title {
            todo.title = title;
        }
        if let Some(created_by) = attrs.created_by {
            todo.created_by = created_by;
        }
        validate(&todo.title, &todo.created_by)?;

        // The row can disappear between lookup and write.
        if self.store.update_todo(&todo)?.is_none() {
            return Err(NotFound::todo(id).into());
        }
        tracing::debug!(todo_id = id, "todo updated");
        Ok(Outcome::NoContent)
    }

    /// Deletes the todo together with all of its items.
    pub fn delete(&self, id: TodoId) -> Result<Outcome<()>, ResourceError> {
        self.find(id)?;
        let items_removed = self.store.delete_todo(id)?;
        tracing::debug!(todo_id = id, items_removed, "todo deleted");
        Ok(Outcome::NoContent)
    }
}

fn validate(title: &str, created_by: &str) -> Result<(), ValidationErrors> {
    let result = ValidationErrors::new()
        .require("Title", title)
        .require("Created by", created_by)
        .into_result();
    if let Err(errors) = &result {
        tracing::debug!(%errors, "todo rejected");
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::memory::MemoryStore;
    use crate::outcome::Status;
    use crate::store::ItemDraft;

    fn setup() -> (Arc<MemoryStore>, TodoResource) {
        let store = Arc::new(MemoryStore::new());
        let resource = TodoResource::new(store.clone());
        (store, resource)
    }

    fn created(resource: &TodoResource, title: &str) -> Todo {
        resource
            .create(CreateTodo::new(title, "1"))
            .unwrap()
            .into_body()
            .unwrap()
    }

    #[test]
    fn create_returns_created_entity() {
        let (_, resource) = setup();
        let outcome = resource.create(CreateTodo::new("Learn Elm", "1")).unwrap();
        assert_eq!(outcome.status(), Status::Created);

        let todo = outcome.into_body().unwrap();
        assert_eq!(todo.title, "Learn Elm");
        assert_eq!(todo.created_by, "1");
    }

    #[test]
    fn created_todo_is_listed_once_with_stable_id() {
        let (_, resource) = setup();
        let todo = created(&resource, "Learn Elm");

        let listed = resource.list().unwrap().into_body().unwrap();
        assert_eq!(listed, vec![todo.clone()]);

        let fetched = resource.get(todo.id).unwrap().into_body().unwrap();
        assert_eq!(fetched.id, todo.id);
    }

    #[rstest]
    #[case(Some(""), Some("1"), "Title")]
    #[case(Some("x"), Some(""), "Created by")]
    #[case(Some("Foobar"), None, "Created by")]
    #[case(None, Some("1"), "Title")]
    fn create_rejects_blank_fields(
        #[case] title: Option<&str>,
        #[case] created_by: Option<&str>,
        #[case] field: &str,
    ) {
        let (store, resource) = setup();
        let attrs = CreateTodo {
            title: title.map(str::to_string),
            created_by: created_by.map(str::to_string),
        };
        let err = resource.create(attrs).unwrap_err();

        assert_eq!(err.status(), Status::UnprocessableEntity);
        let ResourceError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.mentions(field));
        assert!(store.list_todos().unwrap().is_empty());
    }

    #[test]
    fn create_reports_every_blank_field() {
        let (_, resource) = setup();
        let err = resource.create(CreateTodo::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Title can't be blank, Created by can't be blank"
        );
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let (_, resource) = setup();
        let err = resource.get(100).unwrap_err();
        assert_eq!(err.status(), Status::NotFound);
        assert_eq!(err.to_string(), "Couldn't find Todo with 'id'=100");
    }

    #[test]
    fn update_changes_only_supplied_fields() {
        let (_, resource) = setup();
        let todo = created(&resource, "Learn Elm");

        let outcome = resource
            .update(
                todo.id,
                UpdateTodo {
                    title: Some("Shopping".to_string()),
                    created_by: None,
                },
            )
            .unwrap();
        assert_eq!(outcome, Outcome::NoContent);

        let updated = resource.find(todo.id).unwrap();
        assert_eq!(updated.title, "Shopping");
        assert_eq!(updated.created_by, "1");
    }

    #[test]
    fn update_with_explicit_empty_value_is_rejected_and_leaves_entity() {
        let (_, resource) = setup();
        let todo = created(&resource, "Learn Elm");

        let err = resource
            .update(
                todo.id,
                UpdateTodo {
                    title: None,
                    created_by: Some(String::new()),
                },
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Created by can't be blank");
        assert_eq!(resource.find(todo.id).unwrap(), todo);
    }

    #[test]
    fn update_unknown_id_is_not_found_and_mutates_nothing() {
        let (_, resource) = setup();
        let todo = created(&resource, "Learn Elm");

        let err = resource
            .update(
                todo.id + 1,
                UpdateTodo {
                    title: Some("Shopping".to_string()),
                    created_by: None,
                },
            )
            .unwrap_err();
        assert_eq!(err.status(), Status::NotFound);
        assert_eq!(resource.list().unwrap().into_body().unwrap(), vec![todo]);
    }

    #[test]
    fn delete_cascades_to_items() {
        let (store, resource) = setup();
        let todo = created(&resource, "Learn Elm");
        for i in 0..5 {
            store
                .insert_item(ItemDraft {
                    todo_id: todo.id,
                    name: format!("item {i}"),
                    done: false,
                })
                .unwrap();
        }

        assert_eq!(resource.delete(todo.id).unwrap(), Outcome::NoContent);
        assert!(store.list_items(todo.id).unwrap().is_empty());
        assert_eq!(resource.get(todo.id).unwrap_err().status(), Status::NotFound);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let (_, resource) = setup();
        let err = resource.delete(7).unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
    }
}
