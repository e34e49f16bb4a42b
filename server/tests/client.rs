//! Full nested lifecycle against the live server.
//!
//! Starts the server on a random port, then exercises every `ApiClient`
//! operation over real HTTP using ureq, so request building and response
//! parsing are checked against the actual router.

use todo_core::{
    ApiClient, ClientError, CreateItem, CreateTodo, HttpMethod, HttpRequest, HttpResponse,
    UpdateItem, UpdateTodo,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data and the client interprets them.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn nested_lifecycle() {
    let addr = start_server();
    let client = ApiClient::new(&format!("http://{addr}"));

    // Step 1: list todos, should be empty.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 2: invalid create is rejected with the validation message.
    let req = client
        .build_create_todo(&CreateTodo {
            title: Some("Foobar".to_string()),
            created_by: None,
        })
        .unwrap();
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(
        matches!(err, ClientError::Validation(ref m) if m == "Validation failed: Created by can't be blank"),
        "{err:?}"
    );

    // Step 3: create a todo.
    let req = client.build_create_todo(&CreateTodo::new("Learn Elm", "1")).unwrap();
    let todo = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(todo.title, "Learn Elm");

    // Step 4: partial update keeps created_by.
    let req = client
        .build_update_todo(
            todo.id,
            &UpdateTodo {
                title: Some("Shopping".to_string()),
                created_by: None,
            },
        )
        .unwrap();
    client.parse_update_todo(execute(req)).unwrap();
    let fetched = client.parse_get_todo(execute(client.build_get_todo(todo.id))).unwrap();
    assert_eq!(fetched.title, "Shopping");
    assert_eq!(fetched.created_by, "1");

    // Step 5: add items and list them.
    for i in 0..3 {
        let req = client.build_create_item(todo.id, &CreateItem::named(format!("item {i}"))).unwrap();
        client.parse_create_item(execute(req)).unwrap();
    }
    let items = client.parse_list_items(execute(client.build_list_items(todo.id))).unwrap();
    assert_eq!(items.len(), 3);
    let first = items[0].clone();

    // Step 6: mark the first item done.
    let req = client
        .build_update_item(
            todo.id,
            first.id,
            &UpdateItem {
                name: None,
                done: Some(true),
            },
        )
        .unwrap();
    client.parse_update_item(execute(req)).unwrap();
    let item = client
        .parse_get_item(execute(client.build_get_item(todo.id, first.id)))
        .unwrap();
    assert!(item.done);
    assert_eq!(item.name, "item 0");

    // Step 7: delete the item, then the same id again.
    client
        .parse_delete_item(execute(client.build_delete_item(todo.id, first.id)))
        .unwrap();
    client
        .parse_delete_item(execute(client.build_delete_item(todo.id, first.id)))
        .unwrap();
    let err = client
        .parse_get_item(execute(client.build_get_item(todo.id, first.id)))
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref m) if m.starts_with("Couldn't find Item")));

    // Step 8: delete the todo; its items go with it.
    client.parse_delete_todo(execute(client.build_delete_todo(todo.id))).unwrap();
    let err = client
        .parse_list_items(execute(client.build_list_items(todo.id)))
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref m) if m.starts_with("Couldn't find Todo")));

    // Step 9: deleting it again is NotFound.
    let err = client
        .parse_delete_todo(execute(client.build_delete_todo(todo.id)))
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));

    // Step 10: list todos, empty again.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}
