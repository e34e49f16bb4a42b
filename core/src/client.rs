//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `ApiClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The caller executes the round-trip, which
//! keeps this module deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CreateItem, CreateTodo, ErrorBody, Item, ItemId, Todo, TodoId, UpdateItem, UpdateTodo,
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // --- todos ---

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/todos".to_string())
    }

    pub fn build_get_todo(&self, id: TodoId) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("/todos/{id}"))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ClientError> {
        self.json(HttpMethod::Post, "/todos".to_string(), input)
    }

    pub fn build_update_todo(&self, id: TodoId, input: &UpdateTodo) -> Result<HttpRequest, ClientError> {
        self.json(HttpMethod::Put, format!("/todos/{id}"), input)
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("/todos/{id}"))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ClientError> {
        parse_json(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        parse_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        parse_json(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 204)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 204)
    }

    // --- items ---

    pub fn build_list_items(&self, todo_id: TodoId) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("/todos/{todo_id}/items"))
    }

    pub fn build_get_item(&self, todo_id: TodoId, id: ItemId) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("/todos/{todo_id}/items/{id}"))
    }

    pub fn build_create_item(&self, todo_id: TodoId, input: &CreateItem) -> Result<HttpRequest, ClientError> {
        self.json(HttpMethod::Post, format!("/todos/{todo_id}/items"), input)
    }

    pub fn build_update_item(
        &self,
        todo_id: TodoId,
        id: ItemId,
        input: &UpdateItem,
    ) -> Result<HttpRequest, ClientError> {
        self.json(HttpMethod::Put, format!("/todos/{todo_id}/items/{id}"), input)
    }

    pub fn build_delete_item(&self, todo_id: TodoId, id: ItemId) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("/todos/{todo_id}/items/{id}"))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ClientError> {
        parse_json(response, 200)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, ClientError> {
        parse_json(response, 200)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, ClientError> {
        parse_json(response, 201)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 204)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 204)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json<T: Serialize>(&self, method: HttpMethod, path: String, input: &T) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            ..self.bare(method, path)
        })
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ClientError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ClientError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ClientError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ClientError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ClientError::NotFound(message(&response.body))),
        422 => Err(ClientError::Validation(message(&response.body))),
        status => Err(ClientError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

/// The server's `{"message": ...}` text, or the raw body if it is not one.
fn message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.to_string())
}
