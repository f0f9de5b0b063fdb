// MCP surface: JSON-RPC types, request dispatch and the stdio transport
pub mod handler;
pub mod protocol;
pub mod stdio;
