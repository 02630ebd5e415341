//! Interactive terminal session over the Jotlist core store.
//!
//! Split as a library so integration tests can drive scripted sessions
//! through in-memory streams instead of a live terminal.

pub mod controller;
pub mod input;
pub mod menu;
