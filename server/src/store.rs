//! The in-memory todo store.
//!
//! # Design
//! One `TodoStore` exists per process, created seeded at startup and shared
//! behind a lock. It owns the ordered record list outright; handlers never
//! touch the `Vec` directly. Lookup scans in insertion order and matches ids
//! by exact string equality. `update` and `remove` report an empty store
//! before reporting a missing id, preserving the wire contract's precedence.

use crate::error::StoreError;
use crate::types::{Todo, UpdateTodo};

#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Store as it exists at process startup: the single seed record.
    pub fn seeded() -> Self {
        Self {
            todos: vec![Todo::seed()],
        }
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    /// First record whose id matches exactly.
    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Append a record. Id uniqueness is assumed, not enforced.
    pub fn insert(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Apply a partial update to the record with the given id. Fields absent
    /// from `changes` keep their stored values.
    pub fn update(&mut self, id: &str, changes: UpdateTodo) -> Result<(), StoreError> {
        if self.todos.is_empty() {
            return Err(StoreError::Empty);
        }
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound)?;
        if let Some(title) = changes.title {
            todo.title = Some(title);
        }
        if let Some(completed) = changes.completed {
            todo.completed = Some(completed);
        }
        if let Some(description) = changes.description {
            todo.description = Some(description);
        }
        Ok(())
    }

    /// Remove and return the record with the given id.
    pub fn remove(&mut self, id: &str) -> Result<Todo, StoreError> {
        if self.todos.is_empty() {
            return Err(StoreError::Empty);
        }
        let position = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(self.todos.remove(position))
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
