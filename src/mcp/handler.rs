//! # MCP Handler Module
//!
//! Dispatches JSON-RPC requests from the agent host. Supported methods:
//!
//! - `initialize` - server info and capabilities
//! - `ping` - liveness check
//! - `tools/list` - schemas for every catalogue entry
//! - `tools/call` - run one catalogue tool against Etherscan
//!
//! A method named after a catalogue tool (e.g. `account_balance`) is treated
//! as a `tools/call` shortcut with `params` as the arguments.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::{
    mcp::protocol::{error_codes, Request, Response, PROTOCOL_VERSION},
    tools,
    utils, AppState,
};

/// This is the main dispatcher for all incoming MCP requests.
pub async fn handle_mcp_request(req: Request, state: AppState) -> Option<Response> {
    info!("Handling MCP request for method: {}", req.method);

    if req.is_notification() {
        return None;
    }
    if req.jsonrpc != "2.0" {
        return Some(Response::error(
            req.id,
            error_codes::INVALID_REQUEST,
            format!("Unsupported jsonrpc version: {}", req.jsonrpc),
        ));
    }

    let method = req.method.clone();
    let response = match method.as_str() {
        "initialize" => handle_initialize(&req),
        "ping" => Response::success(req.id, json!({})),
        "tools/list" => handle_tools_list(&req, &state),
        "tools/call" => handle_tool_call(req, state).await,
        // Direct calls by tool name are rewritten into tools/call
        name if tools::find_tool(name).is_some() => {
            let wrapped = Request::new(
                req.id,
                "tools/call",
                Some(json!({
                    "name": name,
                    "arguments": req.params.unwrap_or_else(|| json!({}))
                })),
            );
            handle_tool_call(wrapped, state).await
        }
        _ => Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", method),
        ),
    };

    Some(response)
}

/// Handles a 'tools/call' request by dispatching it to the catalogue.
async fn handle_tool_call(req: Request, state: AppState) -> Response {
    let params = match req.params.as_ref() {
        Some(p) => p,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let tool_name = match params.get("name").and_then(|n| n.as_str()) {
        Some(name) => name,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'name' field in params".into(),
            )
        }
    };
    let args = params.get("arguments").cloned().unwrap_or(Value::Null);

    match tools::call_tool(&state, tool_name, &args).await {
        Ok(text) => Response::success(req.id, utils::text_result(text, false)),
        Err(err) => match err.rpc_code() {
            Some(code) => Response::error(req.id, code, err.to_string()),
            // Adapter failures are tool output: the host shows the text to the agent
            None => {
                warn!("Tool {} failed: {}", tool_name, err);
                Response::success(req.id, utils::text_result(err.to_string(), true))
            }
        },
    }
}

/// Handles the 'initialize' request.
fn handle_initialize(req: &Request) -> Response {
    let server_info = json!({
        "name": "etherscan_mcp",
        "version": env!("CARGO_PKG_VERSION")
    });
    let capabilities = json!({ "tools": { "listChanged": false } });
    let instructions = "Etherscan blockchain data tools. Every tool accepts an optional `chainid` \
        (default Ethereum mainnet) and returns the upstream `result` as JSON text.";

    Response::success(
        req.id.clone(),
        json!({
            "serverInfo": server_info,
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": capabilities,
            "instructions": instructions
        }),
    )
}

/// Handles the 'tools/list' request from the static catalogue.
fn handle_tools_list(req: &Request, state: &AppState) -> Response {
    let tools: Vec<Value> = tools::catalogue()
        .iter()
        .map(|tool| tool.to_mcp_tool(&state.config.default_chain_id))
        .collect();

    Response::success(req.id.clone(), json!({ "tools": tools }))
}
