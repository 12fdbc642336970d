//! Parameter definitions for todo-mcp tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::Priority;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddTodoParams {
    #[schemars(description = "Title of the todo item (must be non-empty)")]
    pub title: String,

    #[schemars(description = "Optional longer description of the todo item")]
    #[serde(default)]
    pub description: Option<String>,

    #[schemars(description = "Optional priority: low, medium, or high")]
    #[serde(default)]
    pub priority: Option<Priority>,
}

/// list_todos takes no arguments
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTodosParams {}
