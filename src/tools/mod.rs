//! # Tool Catalogue
//!
//! Static descriptors for every Etherscan operation exposed to the agent.
//! A descriptor is pure data: the upstream `module`/`action`, any fixed
//! query pairs, and the declared parameters. The same table drives argument
//! resolution, the MCP `tools/list` schemas and the Markdown reference.
//!
//! ## Categories
//! - `account_*` - balances, transaction lists, token transfers
//! - `block_*` - rewards, countdowns, block-by-timestamp
//! - `contract_*` - ABI, source code, creation info
//! - `transaction_*` - execution and receipt status
//! - `gas_*` - gas oracle and confirmation estimates
//! - `logs_*` - event logs by address and/or topics
//! - `proxy_*` - Ethereum JSON-RPC passthrough
//! - `stats_*` - supply, price and daily network statistics

use std::collections::HashMap;
use std::fmt::Write as _;

use lazy_static::lazy_static;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, info};

use crate::etherscan::{EtherscanError, QueryParams};
use crate::mcp::protocol::error_codes;
use crate::utils::normalize_chain_id;
use crate::AppState;

mod accounts;
mod blocks;
mod contracts;
mod gas;
mod logs;
mod params;
mod proxy;
mod stats;
mod transactions;

/// Argument every tool accepts in addition to its declared parameters.
pub const CHAIN_ID_PARAM: &str = "chainid";

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    UnknownTool(String),
    #[error("Invalid params: {0}")]
    InvalidParams(String),
    #[error(transparent)]
    Etherscan(#[from] EtherscanError),
}

impl ToolError {
    /// JSON-RPC code for errors that are protocol failures rather than tool output.
    pub fn rpc_code(&self) -> Option<i32> {
        match self {
            ToolError::UnknownTool(_) => Some(error_codes::METHOD_NOT_FOUND),
            ToolError::InvalidParams(_) => Some(error_codes::INVALID_PARAMS),
            ToolError::Etherscan(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Boolean,
    OptionalString,
}

impl ParamKind {
    fn json_type(self) -> &'static str {
        match self {
            ParamKind::Boolean => "boolean",
            ParamKind::String | ParamKind::OptionalString => "string",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Argument name as sent by the host.
    pub name: &'static str,
    /// Key used in the upstream query string.
    pub query_key: &'static str,
    pub kind: ParamKind,
    pub default: Option<&'static str>,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            query_key: name,
            kind: ParamKind::String,
            default: None,
            description,
        }
    }

    pub const fn with_default(
        name: &'static str,
        default: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            query_key: name,
            kind: ParamKind::String,
            default: Some(default),
            description,
        }
    }

    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            query_key: name,
            kind: ParamKind::OptionalString,
            default: None,
            description,
        }
    }

    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            query_key: name,
            kind: ParamKind::Boolean,
            default: None,
            description,
        }
    }

    pub fn is_required(&self) -> bool {
        self.kind != ParamKind::OptionalString && self.default.is_none()
    }

    /// Resolve this parameter from the call arguments. `Ok(None)` means "leave it out".
    fn resolve(&self, args: &Map<String, Value>) -> Result<Option<String>, ToolError> {
        let supplied = match args.get(self.name) {
            None | Some(Value::Null) => None,
            Some(value) => match self.kind {
                ParamKind::Boolean => Some(boolean_text(self.name, value)?),
                ParamKind::String | ParamKind::OptionalString => {
                    Some(scalar_text(self.name, value)?)
                }
            },
        };

        match (self.kind, supplied) {
            (ParamKind::OptionalString, Some(text)) if text.is_empty() => Ok(None),
            (_, Some(text)) => Ok(Some(text)),
            (_, None) => match self.default {
                Some(default) => Ok(Some(default.to_string())),
                None if self.kind == ParamKind::OptionalString => Ok(None),
                None => Err(ToolError::InvalidParams(format!(
                    "missing required argument '{}'",
                    self.name
                ))),
            },
        }
    }
}

fn scalar_text(name: &str, value: &Value) -> Result<String, ToolError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ToolError::InvalidParams(format!(
            "argument '{}' must be a string",
            name
        ))),
    }
}

fn boolean_text(name: &str, value: &Value) -> Result<String, ToolError> {
    let flag = match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    };
    flag.map(|b| if b { "true" } else { "false" }.to_string())
        .ok_or_else(|| {
            ToolError::InvalidParams(format!("argument '{}' must be a boolean", name))
        })
}

#[derive(Debug)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub module: &'static str,
    pub action: &'static str,
    pub params: &'static [ParamSpec],
    /// Pairs sent on every call regardless of arguments.
    pub fixed: &'static [(&'static str, &'static str)],
}

impl ToolDescriptor {
    /// Map call arguments onto the upstream query for this tool.
    pub fn build_params(
        &self,
        args: &Value,
        default_chain_id: &str,
    ) -> Result<QueryParams, ToolError> {
        let empty = Map::new();
        let args = match args {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => {
                return Err(ToolError::InvalidParams(
                    "'arguments' must be an object".to_string(),
                ))
            }
        };

        for key in args.keys() {
            if key != CHAIN_ID_PARAM && !self.params.iter().any(|p| p.name == key) {
                debug!("Ignoring unknown argument '{}' for {}", key, self.name);
            }
        }

        let mut query = QueryParams::for_action(self.module, self.action);
        for spec in self.params {
            query.push_opt(spec.query_key, spec.resolve(args)?);
        }
        for (key, value) in self.fixed {
            query.push(*key, *value);
        }

        let chain_id = match args.get(CHAIN_ID_PARAM) {
            None | Some(Value::Null) => None,
            Some(value) => Some(scalar_text(CHAIN_ID_PARAM, value)?),
        }
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| normalize_chain_id(&raw))
        .unwrap_or_else(|| default_chain_id.to_string());
        query.push(CHAIN_ID_PARAM, chain_id);

        Ok(query)
    }

    /// JSON Schema for the tool's arguments.
    pub fn input_schema(&self, default_chain_id: &str) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for spec in self.params {
            let mut prop = json!({
                "type": spec.kind.json_type(),
                "description": spec.description,
            });
            if let Some(default) = spec.default {
                prop["default"] = json!(default);
            }
            properties.insert(spec.name.to_string(), prop);
            if spec.is_required() {
                required.push(spec.name);
            }
        }
        properties.insert(
            CHAIN_ID_PARAM.to_string(),
            json!({
                "type": "string",
                "description": format!("The chain id, default is {}", default_chain_id),
                "default": default_chain_id,
            }),
        );

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false
        })
    }

    /// Entry for the MCP `tools/list` reply.
    pub fn to_mcp_tool(&self, default_chain_id: &str) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema(default_chain_id),
        })
    }
}

lazy_static! {
    static ref CATALOGUE: Vec<&'static ToolDescriptor> = [
        accounts::TOOLS,
        blocks::TOOLS,
        contracts::TOOLS,
        transactions::TOOLS,
        gas::TOOLS,
        logs::TOOLS,
        proxy::TOOLS,
        stats::TOOLS,
    ]
    .into_iter()
    .flat_map(|group| group.iter())
    .collect();
    static ref BY_NAME: HashMap<&'static str, &'static ToolDescriptor> =
        CATALOGUE.iter().map(|tool| (tool.name, *tool)).collect();
}

/// Every tool, in registration order.
pub fn catalogue() -> &'static [&'static ToolDescriptor] {
    &CATALOGUE[..]
}

pub fn find_tool(name: &str) -> Option<&'static ToolDescriptor> {
    BY_NAME.get(name).copied()
}

/// Resolve and execute a tool call. The credential is checked before the
/// arguments so a missing key is reported the same way for every tool.
pub async fn call_tool(state: &AppState, name: &str, args: &Value) -> Result<String, ToolError> {
    let tool = find_tool(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
    state.etherscan.ensure_api_key()?;
    let params = tool.build_params(args, &state.config.default_chain_id)?;

    info!(
        tool = tool.name,
        module = tool.module,
        action = tool.action,
        "Calling Etherscan"
    );
    Ok(state.etherscan.call(&params).await?)
}

/// Markdown reference of the whole catalogue, grouped by upstream module.
pub fn render_markdown(default_chain_id: &str) -> String {
    let mut out = String::from("# Etherscan MCP tools\n");
    let mut current_module = "";

    for tool in catalogue() {
        if tool.module != current_module {
            current_module = tool.module;
            let _ = write!(out, "\n## module `{}`\n", current_module);
        }
        let _ = write!(
            out,
            "\n### `{}`\n\n{}\n\nUpstream: `module={}&action={}`",
            tool.name, tool.description, tool.module, tool.action
        );
        for (key, value) in tool.fixed {
            let _ = write!(out, "`&{}={}`", key, value);
        }
        out.push_str("\n\n| Parameter | Type | Required | Default | Description |\n");
        out.push_str("|---|---|---|---|---|\n");
        for spec in tool.params {
            let _ = writeln!(
                out,
                "| `{}` | {} | {} | {} | {} |",
                spec.name,
                spec.kind.json_type(),
                if spec.is_required() { "yes" } else { "no" },
                spec.default.unwrap_or("-"),
                spec.description
            );
        }
        let _ = writeln!(
            out,
            "| `{}` | string | no | {} | The chain id |",
            CHAIN_ID_PARAM, default_chain_id
        );
    }
    out
}
