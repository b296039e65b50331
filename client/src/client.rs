//! HTTP client for the todo API.
//!
//! # Design
//! `TodoClient` executes each operation as one blocking round-trip through a
//! shared `ureq::Agent`. The agent is configured with status-as-error
//! disabled so 4xx/5xx responses come back as data; `check_status` is the
//! single place where status codes turn into `ApiError` variants. Mutation
//! responses (`OK` plain text) are never parsed as JSON.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::{CreateTodo, Todo, TodoEnvelope, TodoList, UpdateTodo};

/// Synchronous client for the todo API.
pub struct TodoClient {
    agent: ureq::Agent,
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /todos — every stored record, in insertion order.
    pub fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let (status, body) = self.execute_get(&format!("{}/todos", self.base_url))?;
        check_status(status, &body)?;
        let list: TodoList = parse_json(&body)?;
        Ok(list.todos)
    }

    /// GET /todos/:id — a single record.
    pub fn get_todo(&self, id: &str) -> Result<Todo, ApiError> {
        let (status, body) = self.execute_get(&format!("{}/todos/{id}", self.base_url))?;
        check_status(status, &body)?;
        let envelope: TodoEnvelope = parse_json(&body)?;
        Ok(envelope.todo)
    }

    /// POST /todos — returns the stored record with its server-assigned id.
    pub fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ApiError> {
        let payload = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let response = self
            .agent
            .post(&format!("{}/todos", self.base_url))
            .content_type("application/json")
            .send(payload.as_bytes())
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = read_response(response)?;
        check_status(status, &body)?;
        parse_json(&body)
    }

    /// PUT /todos/:id — partial update; the server answers with plain text.
    pub fn update_todo(&self, id: &str, input: &UpdateTodo) -> Result<(), ApiError> {
        let payload = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let response = self
            .agent
            .put(&format!("{}/todos/{id}", self.base_url))
            .content_type("application/json")
            .send(payload.as_bytes())
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = read_response(response)?;
        check_status(status, &body)
    }

    /// DELETE /todos/:id — the server answers with plain text.
    pub fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .agent
            .delete(&format!("{}/todos/{id}", self.base_url))
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = read_response(response)?;
        check_status(status, &body)
    }

    fn execute_get(&self, url: &str) -> Result<(u16, String), ApiError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_response(response)
    }
}

/// Drain a response into its status code and body text.
fn read_response(mut response: ureq::http::Response<ureq::Body>) -> Result<(u16, String), ApiError> {
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok((status, body))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    if status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status,
        body: body.to_string(),
    })
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
