//! In-memory storage for session todos.
//!
//! # Responsibility
//! - Own the ordered todo collection and the identifier counter.
//! - Resolve raw delete input into an explicit query shape.
//!
//! # Invariants
//! - The store is the only mutation surface over stored todos.
//! - Nothing here persists: the collection dies with the process.

pub mod todo_store;
