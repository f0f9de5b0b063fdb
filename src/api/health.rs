use axum::{extract::State, response::IntoResponse, Json};

use crate::AppState;

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "tools": crate::tools::catalogue().len(),
        "apiKeyConfigured": state.config.has_api_key(),
    }))
}
