//! Todo store and delete-query resolution.
//!
//! # Responsibility
//! - Provide stable `add`/`remove`/`list` APIs over the session collection.
//! - Keep identifier assignment inside the storage boundary.
//!
//! # Invariants
//! - Identifiers come from a counter starting at 1, advanced exactly once
//!   per successful add, and are never reused after deletion.
//! - Insertion order is preserved; removal never reorders survivors.
//! - Write paths validate through [`Todo::new`] before mutating.

use crate::model::todo::{Todo, TodoId, TodoValidationError};

/// Resolved delete query, decided once at input time.
///
/// Each variant carries exactly the value it matches on, so no placeholder
/// id or empty text stands in for "not given".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteQuery {
    /// Match on identifier equality.
    ById(TodoId),
    /// Match on whole-text equality.
    ByText(String),
}

impl DeleteQuery {
    /// Resolves raw user input into a query.
    ///
    /// Input that parses as an integer after trimming becomes [`ById`];
    /// everything else becomes [`ByText`] with the input kept as entered.
    ///
    /// [`ById`]: DeleteQuery::ById
    /// [`ByText`]: DeleteQuery::ByText
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().parse::<TodoId>() {
            Ok(id) => Self::ById(id),
            Err(_) => Self::ByText(raw.to_string()),
        }
    }

    fn matches(&self, todo: &Todo) -> bool {
        match self {
            Self::ById(id) => todo.id == *id,
            Self::ByText(text) => todo.text == *text,
        }
    }
}

/// In-memory ordered collection of session todos.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl TodoStore {
    /// Creates an empty store with the identifier counter at 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a new todo and returns its assigned identifier.
    ///
    /// # Contract
    /// - `text` must be non-empty after trimming; the interactive flows
    ///   check this first and skip empty input silently, so the error here
    ///   is the write-path backstop.
    /// - The counter advances only on success.
    pub fn add(&mut self, text: impl Into<String>) -> Result<TodoId, TodoValidationError> {
        let todo = Todo::new(self.next_id, text)?;
        let id = todo.id;
        self.todos.push(todo);
        self.next_id += 1;
        Ok(id)
    }

    /// Removes the first todo matched by `query`, in insertion order.
    ///
    /// Returns the removed record so callers can report its text, or
    /// `None` when nothing matched.
    pub fn remove(&mut self, query: &DeleteQuery) -> Option<Todo> {
        let position = self.todos.iter().position(|todo| query.matches(todo))?;
        Some(self.todos.remove(position))
    }

    /// Read-only view of stored todos in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    /// Number of stored todos.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the store holds no todos.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
