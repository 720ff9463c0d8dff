//! Error handling utilities for MCP server

use micromanage_core::WorkplanError;
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use serde::Serialize;

/// Turns a work plan error into an error tool result carrying the JSON
/// payload, so the client sees it as data rather than a protocol failure.
pub fn to_tool_error(error: &WorkplanError) -> CallToolResult {
    let payload = error.to_payload();
    let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.error.clone());
    CallToolResult::error(vec![Content::text(text)])
}

/// Successful tool result with `value` as pretty JSON.
pub fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::internal_error(format!("Failed to serialize result: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
