//! MCP Server implementation for the todo list
//!
//! This module defines the main MCP server that exposes the todo
//! operations as tools. Handler implementations are in the handlers module.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::handlers;
use crate::params::{AddTodoParams, ListTodosParams};
use crate::store::TodoStore;

/// The main Todo MCP Server
#[derive(Clone)]
pub struct TodoMcpServer {
    store: TodoStore,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TodoMcpServer {
    pub fn new() -> Self {
        Self {
            store: TodoStore::new(),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Adds a new todo item")]
    async fn add_todo(
        &self,
        Parameters(params): Parameters<AddTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_todo(&self.store, params).await
    }

    #[tool(description = "Lists all todo items")]
    async fn list_todos(
        &self,
        Parameters(params): Parameters<ListTodosParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_todos(&self.store, params).await
    }
}

#[tool_handler]
impl rmcp::ServerHandler for TodoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "A simple TODO application served over MCP. Todos live in \
                 process memory for the lifetime of the server and are lost \
                 on exit."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for TodoMcpServer {
    fn default() -> Self {
        Self::new()
    }
}
