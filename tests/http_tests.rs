//! HTTP router tests, driven through `tower::ServiceExt::oneshot`

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use etherscan_mcp_server::{api::create_router, config::Config, tools, AppState};

fn create_test_app() -> Router {
    create_router(AppState::new(Config::default()).unwrap())
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn health_reports_missing_key() {
    let (status, body) = send(create_test_app(), Method::GET, "/api/health", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["apiKeyConfigured"], json!(false));
    assert_eq!(body["tools"], json!(tools::catalogue().len()));
}

#[tokio::test]
async fn lists_tool_schemas() {
    let (status, body) = send(create_test_app(), Method::GET, "/api/tools", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["tools"].as_array().unwrap().len(),
        tools::catalogue().len()
    );
}

#[tokio::test]
async fn unknown_tool_is_not_found() {
    let (status, body) = send(
        create_test_app(),
        Method::POST,
        "/api/tools/does_not_exist",
        Body::from("{}"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("does_not_exist"));
}

#[tokio::test]
async fn missing_key_is_server_error() {
    let (status, body) = send(
        create_test_app(),
        Method::POST,
        "/api/tools/account_balance",
        Body::from(r#"{"address":"0xabc"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("ETHERSCAN_API_KEY"));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = create_router(
        AppState::new(Config {
            etherscan_api_key: Some(secrecy::SecretString::new("KEY".into())),
            ..Config::default()
        })
        .unwrap(),
    );
    let (status, _) = send(app, Method::POST, "/api/tools/stats_ethprice", Body::from("{oops")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rpc_endpoint_dispatches_mcp_requests() {
    let (status, body) = send(
        create_test_app(),
        Method::POST,
        "/api/rpc",
        Body::from(r#"{"jsonrpc":"2.0","id":5,"method":"ping"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(5));
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn rpc_notification_is_accepted_without_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/rpc")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        ))
        .unwrap();
    let response = create_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}
