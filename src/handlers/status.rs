use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn status() -> impl IntoResponse {
    Json(json!({
        "status": "Telegram relay is running",
        "endpoints": ["/health", "/webhook", "/test"],
        "configured": true
    }))
}
