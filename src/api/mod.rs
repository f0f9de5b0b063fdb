//! # API Module
//!
//! HTTP surface for hosts that cannot speak MCP over stdio.
//!
//! ## Available Endpoints
//!
//! - `GET /api/health` - liveness and credential status
//! - `GET /api/tools` - tool schemas, same shape as MCP `tools/list`
//! - `POST /api/tools/:name` - run one tool; JSON body holds the arguments
//! - `POST /api/rpc` - JSON-RPC endpoint for MCP requests

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::mcp::{handler::handle_mcp_request, protocol::Request};
use crate::AppState;

pub mod health;
pub mod tools;

/// Router with every endpoint mounted under `/api`.
pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/tools", get(tools::list_tools_handler))
        .route("/tools/:name", post(tools::call_tool_handler))
        .route("/rpc", post(rpc_handler));

    Router::new()
        .nest("/api", api_router)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

// Forward JSON-RPC requests over HTTP to the MCP handler.
// Notifications are acknowledged with an empty 202.
async fn rpc_handler(State(state): State<AppState>, Json(req): Json<Request>) -> Response {
    match handle_mcp_request(req, state).await {
        Some(resp) => Json(resp).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
