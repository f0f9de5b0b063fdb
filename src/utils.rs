//! Small helpers shared by the MCP and HTTP surfaces.

use serde_json::{json, Value};

/// Normalize common chain aliases users might pass for `chainid`.
/// Unknown values are returned trimmed but otherwise untouched.
pub fn normalize_chain_id(input: &str) -> String {
    // Normalize case and separators first
    let s = input.trim().to_lowercase().replace([' ', '_'], "-");

    let id = match s.as_str() {
        "mainnet" | "main" | "eth" | "ethereum" => "1",
        "sepolia" | "testnet" => "11155111",
        "holesky" => "17000",
        "optimism" | "op" => "10",
        "bsc" | "bnb" => "56",
        "polygon" | "matic" => "137",
        "base" => "8453",
        "arbitrum" | "arbitrum-one" | "arb" => "42161",
        _ => return input.trim().to_string(),
    };
    id.to_string()
}

/// MCP `tools/call` result carrying a single text block.
pub fn text_result(text: String, is_error: bool) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_aliases_to_numeric_ids() {
        assert_eq!(normalize_chain_id("Mainnet"), "1");
        assert_eq!(normalize_chain_id(" sepolia "), "11155111");
        assert_eq!(normalize_chain_id("Arbitrum_One"), "42161");
    }

    #[test]
    fn leaves_numeric_and_unknown_ids_alone() {
        assert_eq!(normalize_chain_id("8453"), "8453");
        assert_eq!(normalize_chain_id("SomeChain"), "SomeChain");
    }

    #[test]
    fn text_result_flags_errors() {
        let v = text_result("boom".into(), true);
        assert_eq!(v["isError"], json!(true));
        assert_eq!(v["content"][0]["text"], json!("boom"));
    }
}
