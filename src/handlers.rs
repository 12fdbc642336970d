//! Handler implementations for todo-mcp tools
//!
//! Each handler validates its params, touches the store, and builds a
//! CallToolResult carrying both structured and text output.

use rmcp::{model::CallToolResult, ErrorData as McpError};

use crate::params::{AddTodoParams, ListTodosParams};
use crate::result::{internal_error, invalid_params, structured_success};
use crate::store::TodoStore;
use crate::types::{AddTodoResponse, ListTodosResponse};

pub async fn add_todo(
    store: &TodoStore,
    params: AddTodoParams,
) -> Result<CallToolResult, McpError> {
    // Non-empty title is the one constraint the schema cannot express;
    // reject before the store is touched.
    if params.title.is_empty() {
        return Err(invalid_params("Title cannot be empty"));
    }

    let item = store
        .append(params.title, params.description, params.priority)
        .await;

    tracing::debug!(id = %item.id, title = %item.title, "todo added");

    structured_success(
        format!("Todo item \"{}\" added successfully.", item.title),
        &AddTodoResponse { success: true },
    )
}

pub async fn list_todos(
    store: &TodoStore,
    _params: ListTodosParams,
) -> Result<CallToolResult, McpError> {
    let response = ListTodosResponse {
        todos: store.snapshot().await,
    };

    let text = serde_json::to_string_pretty(&response)
        .map_err(|e| internal_error(format!("Failed to render todos: {}", e)))?;

    structured_success(text, &response)
}
