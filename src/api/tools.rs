use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use crate::etherscan::EtherscanError;
use crate::tools::{self, ToolError};
use crate::AppState;

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        let status = match &self {
            ToolError::UnknownTool(_) => StatusCode::NOT_FOUND,
            ToolError::InvalidParams(_) => StatusCode::BAD_REQUEST,
            ToolError::Etherscan(EtherscanError::Configuration(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ToolError::Etherscan(EtherscanError::Transport(_)) => StatusCode::BAD_GATEWAY,
            ToolError::Etherscan(EtherscanError::Upstream(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// GET /tools
pub async fn list_tools_handler(State(state): State<AppState>) -> impl IntoResponse {
    let tools: Vec<Value> = tools::catalogue()
        .iter()
        .map(|tool| tool.to_mcp_tool(&state.config.default_chain_id))
        .collect();
    Json(json!({ "tools": tools }))
}

// POST /tools/:name with the arguments object as body. An empty body means no arguments.
pub async fn call_tool_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ToolError> {
    let args: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ToolError::InvalidParams(format!("request body is not JSON: {}", e)))?
    };

    match tools::call_tool(&state, &name, &args).await {
        // The tool result is already JSON text
        Ok(text) => Ok((
            StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            text,
        )
            .into_response()),
        Err(e) => {
            error!("Tool {} failed over HTTP: {}", name, e);
            Err(e)
        }
    }
}
