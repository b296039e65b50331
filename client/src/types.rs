//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently;
//! the integration test catches any drift between the two crates. Records
//! are open: fields beyond the nominal three round-trip through a flattened
//! map, matching the server's copy-everything creation semantics.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request payload for creating a new todo. The server copies every supplied
/// field onto the stored record and assigns the id itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Envelope around `GET /todos` responses.
#[derive(Debug, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

/// Envelope around `GET /todos/:id` responses.
#[derive(Debug, Deserialize)]
pub struct TodoEnvelope {
    #[serde(rename = "toDo")]
    pub todo: Todo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_todo_skips_absent_fields() {
        let input = CreateTodo {
            title: Some("Buy milk".to_string()),
            ..CreateTodo::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Buy milk" }));
    }

    #[test]
    fn create_todo_carries_extra_fields() {
        let mut extra = Map::new();
        extra.insert("priority".to_string(), Value::from(5));
        let input = CreateTodo {
            title: Some("Tagged".to_string()),
            extra,
            ..CreateTodo::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["priority"], 5);
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str("{}").unwrap();
        assert!(input.title.is_none());
        assert!(input.completed.is_none());
        assert!(input.description.is_none());
        assert_eq!(serde_json::to_string(&input).unwrap(), "{}");
    }

    #[test]
    fn list_envelope_unwraps_todos_key() {
        let list: TodoList = serde_json::from_str(
            r#"{"todos":[{"id":"ABC","title":"New Todo","description":"A new todo item"}]}"#,
        )
        .unwrap();
        assert_eq!(list.todos.len(), 1);
        assert_eq!(list.todos[0].id, "ABC");
        assert!(list.todos[0].completed.is_none());
    }

    #[test]
    fn get_envelope_unwraps_camel_case_key() {
        let envelope: TodoEnvelope =
            serde_json::from_str(r#"{"toDo":{"id":"xYz1234","completed":true}}"#).unwrap();
        assert_eq!(envelope.todo.id, "xYz1234");
        assert_eq!(envelope.todo.completed, Some(true));
    }

    #[test]
    fn todo_roundtrips_extra_fields() {
        let raw = r#"{"id":"abcdefg","title":"T","priority":5}"#;
        let todo: Todo = serde_json::from_str(raw).unwrap();
        assert_eq!(todo.extra["priority"], 5);
        let back = serde_json::to_value(&todo).unwrap();
        assert_eq!(back["priority"], 5);
    }
}
