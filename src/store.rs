//! In-memory todo store - ephemeral, process-lifetime storage
//!
//! The store is a cheaply clonable handle injected into the server at
//! construction time; all tool handlers share the same underlying list.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::types::{Priority, TodoItem};

/// Append-only, insertion-ordered todo list
#[derive(Clone)]
pub struct TodoStore {
    inner: Arc<RwLock<TodoStoreInner>>,
}

struct TodoStoreInner {
    /// Records in insertion order
    todos: Vec<TodoItem>,
    /// Next identifier; independent of current length so ids stay unique
    /// and stable if a removal path is ever added
    next_id: u64,
}

impl TodoStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TodoStoreInner {
                todos: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Build a new record from the given fields, assign it the next id,
    /// and append it. Returns the stored record.
    pub async fn append(
        &self,
        title: String,
        description: Option<String>,
        priority: Option<Priority>,
    ) -> TodoItem {
        let mut inner = self.inner.write().await;

        let item = TodoItem {
            id: inner.next_id.to_string(),
            title,
            description,
            priority,
            completed: false,
        };
        inner.next_id += 1;
        inner.todos.push(item.clone());

        item
    }

    /// All records in insertion order
    pub async fn snapshot(&self) -> Vec<TodoItem> {
        self.inner.read().await.todos.clone()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    /// True if nothing has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.todos.is_empty()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
