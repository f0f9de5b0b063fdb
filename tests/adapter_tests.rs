//! Request adapter behaviour against a fake Etherscan endpoint

use mockito::{mock, Matcher};
use secrecy::SecretString;
use serde_json::json;

use etherscan_mcp_server::{
    config::Config,
    etherscan::{EtherscanClient, EtherscanError, QueryParams},
    tools::{self, ToolError},
    AppState,
};

const API_PATH: &str = r"^/v2/api";

fn mock_config(api_key: Option<&str>) -> Config {
    Config {
        etherscan_api_key: api_key.map(|k| SecretString::new(k.to_string())),
        etherscan_api_url: format!("{}/v2/api", mockito::server_url()),
        request_timeout_secs: 5,
        ..Config::default()
    }
}

fn mock_client() -> EtherscanClient {
    EtherscanClient::new(&mock_config(Some("TESTKEY"))).unwrap()
}

fn balance_query() -> QueryParams {
    let mut params = QueryParams::for_action("account", "balance");
    params.push("address", "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae");
    params.push("chainid", "1");
    params
}

#[tokio::test]
async fn ok_envelope_returns_pretty_result() {
    let _m = mock("GET", Matcher::Regex(API_PATH.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"1","message":"OK","result":{"x":1}}"#)
        .create();

    let text = mock_client().call(&balance_query()).await.unwrap();
    assert_eq!(text, serde_json::to_string_pretty(&json!({ "x": 1 })).unwrap());
}

#[tokio::test]
async fn no_transactions_found_is_an_empty_result() {
    let _m = mock("GET", Matcher::Regex(API_PATH.to_string()))
        .with_status(200)
        .with_body(r#"{"status":"0","message":"No transactions found","result":[]}"#)
        .create();

    let text = mock_client().call(&balance_query()).await.unwrap();
    assert_eq!(serde_json::from_str::<serde_json::Value>(&text).unwrap(), json!([]));
}

#[tokio::test]
async fn invalid_api_key_is_an_upstream_error() {
    let _m = mock("GET", Matcher::Regex(API_PATH.to_string()))
        .with_status(200)
        .with_body(r#"{"status":"0","message":"Invalid API Key","result":null}"#)
        .create();

    match mock_client().call(&balance_query()).await {
        Err(EtherscanError::Upstream(detail)) => assert!(detail.contains("Invalid API Key")),
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn upstream_result_text_is_reported_verbatim() {
    let _m = mock("GET", Matcher::Regex(API_PATH.to_string()))
        .with_status(200)
        .with_body(r#"{"status":"0","message":"NOTOK","result":"Error! Invalid address format"}"#)
        .create();

    let err = mock_client().call(&balance_query()).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Etherscan API error: Error! Invalid address format"
    );
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let _m = mock("GET", Matcher::Regex(API_PATH.to_string()))
        .with_status(503)
        .with_body("Service Unavailable")
        .create();

    match mock_client().call(&balance_query()).await {
        Err(EtherscanError::Transport(msg)) => assert!(msg.contains("503")),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_body_is_a_transport_error() {
    let _m = mock("GET", Matcher::Regex(API_PATH.to_string()))
        .with_status(200)
        .with_body("<html>rate limited</html>")
        .create();

    assert!(matches!(
        mock_client().call(&balance_query()).await,
        Err(EtherscanError::Transport(_))
    ));
}

#[tokio::test]
async fn bare_json_string_is_a_transport_error() {
    let _m = mock("GET", Matcher::Regex(API_PATH.to_string()))
        .with_status(200)
        .with_body(r#""Max rate limit reached""#)
        .create();

    match mock_client().call(&balance_query()).await {
        Err(EtherscanError::Transport(msg)) => {
            assert!(msg.contains("unexpected response shape"));
            assert!(msg.contains("Max rate limit reached"));
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Bind then drop a listener so the port is known to be closed
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = Config {
        etherscan_api_key: Some(SecretString::new("TESTKEY".to_string())),
        etherscan_api_url: format!("http://127.0.0.1:{}/v2/api", port),
        request_timeout_secs: 5,
        ..Config::default()
    };
    let client = EtherscanClient::new(&config).unwrap();

    let err = client.call(&balance_query()).await.unwrap_err();
    assert!(matches!(err, EtherscanError::Transport(_)), "got {:?}", err);
    assert!(err.to_string().starts_with("HTTP request failed"));
}

#[tokio::test]
async fn tool_call_sends_mapped_query_with_apikey() {
    let m = mock("GET", Matcher::Regex(API_PATH.to_string()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("module".into(), "account".into()),
            Matcher::UrlEncoded("action".into(), "tokentx".into()),
            Matcher::UrlEncoded("address".into(), "0xabc".into()),
            Matcher::UrlEncoded("startblock".into(), "0".into()),
            Matcher::UrlEncoded("endblock".into(), "99999999".into()),
            Matcher::UrlEncoded("sort".into(), "desc".into()),
            Matcher::UrlEncoded("chainid".into(), "11155111".into()),
            Matcher::UrlEncoded("apikey".into(), "TESTKEY".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"status":"1","message":"OK","result":[{"hash":"0x1"}]}"#)
        .expect(1)
        .create();

    let state = AppState::new(mock_config(Some("TESTKEY"))).unwrap();
    let text = tools::call_tool(
        &state,
        "account_tokentx",
        &json!({ "address": "0xabc", "sort": "desc", "chainid": "sepolia" }),
    )
    .await
    .unwrap();

    assert!(text.contains("0x1"));
    m.assert();
}

#[tokio::test]
async fn boolean_argument_reaches_upstream_lowercase() {
    let m = mock("GET", Matcher::Regex(API_PATH.to_string()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "eth_getBlockByNumber".into()),
            Matcher::UrlEncoded("boolean".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"jsonrpc":"2.0","id":1,"result":{"number":"0x10d4f"}}"#)
        .expect(1)
        .create();

    let state = AppState::new(mock_config(Some("TESTKEY"))).unwrap();
    let text = tools::call_tool(
        &state,
        "proxy_eth_getBlockByNumber",
        &json!({ "tag": "0x10d4f", "boolean": true }),
    )
    .await
    .unwrap();

    assert!(text.contains("0x10d4f"));
    m.assert();
}

#[tokio::test]
async fn missing_credential_fails_every_tool_before_any_request() {
    let state = AppState::new(mock_config(None)).unwrap();
    for tool in tools::catalogue() {
        // No arguments at all: the credential check still wins
        let err = tools::call_tool(&state, tool.name, &json!({}))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ToolError::Etherscan(EtherscanError::Configuration(_))),
            "{} returned {:?}",
            tool.name,
            err
        );
    }
}
