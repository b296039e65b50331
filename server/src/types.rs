//! Wire DTOs for the todo API.
//!
//! # Design
//! `Todo` carries the three nominal fields as `Option`s plus a flattened
//! field bag: creation accepts an arbitrary JSON object and every supplied
//! field is stored and echoed back verbatim. Absent fields are omitted from
//! serialized output rather than rendered as `null`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single stored todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Any other fields the client supplied at creation time.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Todo {
    /// The one record present at startup before any client request.
    pub fn seed() -> Self {
        Self {
            id: "ABC".to_string(),
            title: Some("New Todo".to_string()),
            description: Some("A new todo item".to_string()),
            completed: None,
            extra: Map::new(),
        }
    }
}

/// Request payload for creating a todo: an arbitrary field bag. The server
/// assigns the id; a client-supplied `id` is discarded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewTodo {
    pub fn into_todo(self, id: String) -> Todo {
        let mut extra = self.extra;
        // The generated id wins over anything the client sent.
        extra.remove("id");
        Todo {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
            extra,
        }
    }
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields leave the stored value untouched.
/// Fields outside the nominal three are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub description: Option<String>,
}

/// Response envelope for `GET /todos`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

/// Response envelope for `GET /todos/:id`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoEnvelope {
    #[serde(rename = "toDo")]
    pub todo: Todo,
}
