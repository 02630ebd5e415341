//! Todo domain model.
//!
//! # Responsibility
//! - Define the record shared by the store and the terminal flows.
//! - Provide validation for the identifier and text invariants.
//!
//! # Invariants
//! - `id` is positive and never reused for another todo in the session.
//! - `text` is non-empty after trimming, but stored exactly as entered.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier for a stored todo.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Real identifiers are always positive; the signed width exists so raw
/// numeric delete queries can be compared without a separate conversion.
pub type TodoId = i64;

/// Validation failures for todo construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Text was empty or whitespace-only after trimming.
    EmptyText,
    /// Identifier was zero or negative.
    NonPositiveId(TodoId),
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "todo text must not be empty"),
            Self::NonPositiveId(id) => write!(f, "todo id must be positive, got {id}"),
        }
    }
}

impl Error for TodoValidationError {}

/// Canonical record for one stored todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Monotonically assigned identifier, unique for the session.
    pub id: TodoId,
    /// User-entered text, kept as entered.
    pub text: String,
}

impl Todo {
    /// Creates a todo after validating identifier and text.
    ///
    /// # Errors
    /// - [`TodoValidationError::NonPositiveId`] when `id` is below 1.
    /// - [`TodoValidationError::EmptyText`] when `text` trims to empty.
    pub fn new(id: TodoId, text: impl Into<String>) -> Result<Self, TodoValidationError> {
        let todo = Self {
            id,
            text: text.into(),
        };
        todo.validate()?;
        Ok(todo)
    }

    /// Checks the construction invariants on an existing value.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id < 1 {
            return Err(TodoValidationError::NonPositiveId(self.id));
        }
        if self.text.trim().is_empty() {
            return Err(TodoValidationError::EmptyText);
        }
        Ok(())
    }
}
