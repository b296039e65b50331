//! In-memory todo REST service.
//!
//! Exposes five routes on `/todos` over a single process-wide [`TodoStore`];
//! any other path falls through to a plain-text `Invalid Route` response.
//! State lives behind one `RwLock` so each handler's read-or-mutate completes
//! atomically on the multi-threaded runtime.

pub mod error;
pub mod id;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{NewTodo, Todo, TodoEnvelope, TodoList, UpdateTodo};

pub type Db = Arc<RwLock<TodoStore>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TodoStore::seeded()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .fallback(invalid_route)
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<TodoList> {
    let store = db.read().await;
    Json(TodoList {
        todos: store.list().to_vec(),
    })
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<TodoEnvelope>, StoreError> {
    let store = db.read().await;
    store
        .get(&id)
        .cloned()
        .map(|todo| Json(TodoEnvelope { todo }))
        .ok_or(StoreError::NotFound)
}

async fn create_todo(State(db): State<Db>, Json(input): Json<NewTodo>) -> Json<Todo> {
    let todo = input.into_todo(id::random_id());
    tracing::debug!(id = %todo.id, "created todo");
    db.write().await.insert(todo.clone());
    Json(todo)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(changes): Json<UpdateTodo>,
) -> Result<&'static str, StoreError> {
    let mut store = db.write().await;
    store.update(&id, changes)?;
    Ok("OK")
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<&'static str, StoreError> {
    let mut store = db.write().await;
    store.remove(&id)?;
    tracing::debug!(%id, "deleted todo");
    Ok("OK")
}

async fn invalid_route() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Invalid Route")
}
