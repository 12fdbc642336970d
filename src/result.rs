//! Helpers for building MCP tool responses and errors

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

/// Successful result carrying both a structured payload and a text block
///
/// MCP tool results have two channels: free-text content for display and
/// `structured_content` for programmatic consumers. Every tool here fills
/// both.
pub fn structured_success<T: Serialize>(
    text: impl Into<String>,
    payload: &T,
) -> Result<CallToolResult, McpError> {
    let value = serde_json::to_value(payload)
        .map_err(|e| internal_error(format!("Failed to serialize result: {}", e)))?;

    Ok(CallToolResult {
        content: vec![Content::text(text.into())],
        is_error: Some(false),
        structured_content: Some(value),
        meta: Default::default(),
    })
}

/// Create an invalid params error with a message
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

/// Create an internal error with a message
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_success_fills_both_channels() {
        let result = structured_success("done", &json!({ "success": true })).unwrap();
        assert!(!result.is_error.unwrap_or(true));
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.structured_content, Some(json!({ "success": true })));
    }

    #[test]
    fn test_invalid_params_message() {
        let err = invalid_params("bad param");
        assert!(err.message.contains("bad param"));
    }
}
