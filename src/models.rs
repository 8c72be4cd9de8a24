//! Frontend Models
//!
//! Data structures for the todo list.

use uuid::Uuid;

/// A single todo entry
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
}

impl TodoItem {
    /// Creates a todo with a fresh unique id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
        }
    }
}
