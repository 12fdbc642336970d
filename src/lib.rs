//! Todo MCP Library
//!
//! A minimal in-memory todo list exposed over the Model Context Protocol.
//! Two tools: `add_todo` appends a record, `list_todos` returns every
//! record in insertion order. Nothing is persisted; the list dies with
//! the process.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use todo_mcp::TodoMcpServer;
//!
//! let server = TodoMcpServer::new();
//! // Serve via stdio or drive the handlers directly in tests
//! ```

pub mod handlers;
pub mod params;
pub mod result;
pub mod server;
pub mod store;
pub mod types;

// Re-export main server type
pub use server::TodoMcpServer;
pub use store::TodoStore;

// Re-export parameter types for direct API usage
pub use params::*;
