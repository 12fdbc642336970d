//! Type definitions for todo-mcp

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Todo priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub completed: bool,
}

/// Structured payload returned by add_todo
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddTodoResponse {
    pub success: bool,
}

/// Structured payload returned by list_todos
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTodosResponse {
    pub todos: Vec<TodoItem>,
}
