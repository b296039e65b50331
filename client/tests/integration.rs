//! Full CRUD lifecycle test against the live todo server.
//!
//! # Design
//! Starts the server on a random port, then exercises every client operation
//! over real HTTP. Validates the whole wire contract end to end: the seed
//! record, envelope unwrapping, partial updates, delete idempotence, and the
//! empty-store 500.

use todo_client::{ApiError, CreateTodo, TodoClient, UpdateTodo};

/// Start the real server on a random port and return its base URL.
fn spawn_server() -> String {
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

    format!("http://{addr}")
}

#[test]
fn crud_lifecycle() {
    let client = TodoClient::new(&spawn_server());

    // Step 1: list — only the seed record exists at startup.
    let todos = client.list_todos().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, "ABC");

    // Step 2: fetch the seed record directly.
    let seed = client.get_todo("ABC").unwrap();
    assert_eq!(seed.title.as_deref(), Some("New Todo"));
    assert_eq!(seed.description.as_deref(), Some("A new todo item"));

    // Step 3: create a todo.
    let create_input = CreateTodo {
        title: Some("Integration test".to_string()),
        description: Some("over real HTTP".to_string()),
        completed: Some(false),
        ..CreateTodo::default()
    };
    let created = client.create_todo(&create_input).unwrap();
    assert_eq!(created.title.as_deref(), Some("Integration test"));
    assert_eq!(created.id.len(), 7);
    assert_ne!(created.id, "ABC");
    let id = created.id.clone();

    // Step 4: get the created todo.
    let fetched = client.get_todo(&id).unwrap();
    assert_eq!(fetched, created);

    // Step 5: update completed only; title must survive.
    let update_input = UpdateTodo {
        completed: Some(true),
        ..UpdateTodo::default()
    };
    client.update_todo(&id, &update_input).unwrap();
    let updated = client.get_todo(&id).unwrap();
    assert_eq!(updated.title.as_deref(), Some("Integration test"));
    assert_eq!(updated.completed, Some(true));

    // Step 6: update title only; completed must survive.
    let update_input = UpdateTodo {
        title: Some("Updated title".to_string()),
        ..UpdateTodo::default()
    };
    client.update_todo(&id, &update_input).unwrap();
    let updated = client.get_todo(&id).unwrap();
    assert_eq!(updated.title.as_deref(), Some("Updated title"));
    assert_eq!(updated.completed, Some(true));

    // Step 7: list — seed plus the created todo, in insertion order.
    let todos = client.list_todos().unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].id, "ABC");
    assert_eq!(todos[1].id, id);

    // Step 8: delete the created todo.
    client.delete_todo(&id).unwrap();

    // Step 9: get after delete — NotFound.
    let err = client.get_todo(&id).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 10: delete again — NotFound, the seed keeps the store non-empty.
    let err = client.delete_todo(&id).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 11: delete the seed record; the store is now empty.
    client.delete_todo("ABC").unwrap();
    let todos = client.list_todos().unwrap();
    assert!(todos.is_empty(), "expected empty list after deleting the seed");

    // Step 12: mutations on the empty store surface the server's 500.
    let err = client
        .update_todo("ABC", &UpdateTodo::default())
        .unwrap_err();
    assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    let err = client.delete_todo("ABC").unwrap_err();
    assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
}

#[test]
fn arbitrary_create_fields_round_trip() {
    let client = TodoClient::new(&spawn_server());

    let mut input = CreateTodo {
        title: Some("Tagged".to_string()),
        ..CreateTodo::default()
    };
    input
        .extra
        .insert("priority".to_string(), serde_json::Value::from(5));

    let created = client.create_todo(&input).unwrap();
    assert_eq!(created.extra["priority"], 5);

    let fetched = client.get_todo(&created.id).unwrap();
    assert_eq!(fetched.extra["priority"], 5);
}
