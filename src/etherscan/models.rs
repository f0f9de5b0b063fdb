// src/etherscan/models.rs
use serde_json::{Map, Value};

use super::error::EtherscanError;

/// Message Etherscan pairs with `status: "0"` when a list query simply has no rows.
pub const NO_TRANSACTIONS_FOUND: &str = "No transactions found";

// --- Outbound query ---

/// Ordered upstream query pairs. A `None` value marks a parameter the caller
/// left unset; it is dropped when the request URL is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a query with the fixed `module`/`action` pair.
    pub fn for_action(module: &str, action: &str) -> Self {
        let mut params = Self::new();
        params.push("module", module);
        params.push("action", action);
        params
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), Some(value.into())));
    }

    pub fn push_opt(&mut self, key: impl Into<String>, value: Option<String>) {
        self.pairs.push((key.into(), value));
    }

    /// Value of the first present pair with this key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.present().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Pairs that will actually be sent, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.present().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// --- Inbound envelope ---

/// The `{status, message, result}` wrapper Etherscan puts around every reply.
/// Proxy-module replies are JSON-RPC shaped and only carry `result`, so every
/// field is optional. `result` keeps the difference between a missing key
/// (`None`) and an explicit `null` (`Some(Value::Null)`).
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamEnvelope {
    pub status: Option<String>,
    pub message: Option<String>,
    pub result: Option<Value>,
    raw: Value,
}

impl UpstreamEnvelope {
    pub fn from_value(raw: Value) -> Self {
        let empty = Map::new();
        let obj = raw.as_object().unwrap_or(&empty);
        let text = |key: &str| match obj.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Self {
            status: text("status"),
            message: text("message"),
            result: obj.get("result").cloned(),
            raw,
        }
    }

    /// `status == "0"` is a failure unless it is the benign empty-list reply.
    pub fn is_failure(&self) -> bool {
        self.status.as_deref() == Some("0")
            && self.message.as_deref() != Some(NO_TRANSACTIONS_FOUND)
    }

    /// Upstream's own error detail: `result` when it carries something, else `message`.
    pub fn error_detail(&self) -> String {
        match &self.result {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Null) | None | Some(Value::String(_)) => self
                .message
                .clone()
                .unwrap_or_else(|| "Unknown API error".to_string()),
            Some(other) => other.to_string(),
        }
    }

    /// Applies the success/failure rules and yields the value handed back to the tool.
    pub fn into_result(self) -> Result<Value, EtherscanError> {
        if self.is_failure() {
            return Err(EtherscanError::Upstream(self.error_detail()));
        }
        Ok(match self.result {
            Some(result) => result,
            None => self.raw,
        })
    }
}
