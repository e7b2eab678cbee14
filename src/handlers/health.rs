use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

/// Reports configuration presence only; the provider is never contacted.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "bot_configured": !state.config.telegram.bot_token.is_empty(),
        "chat_configured": !state.config.telegram.chat_id.is_empty(),
    }))
}
