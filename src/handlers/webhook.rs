use axum::{extract::State, Json};

use super::RelayResponse;
use crate::error::AppError;
use crate::models::Notification;
use crate::services::ChatMessage;
use crate::startup::AppState;

const LOG_PREVIEW_CHARS: usize = 200;

#[tracing::instrument(skip(state, notification))]
pub async fn receive_webhook(
    State(state): State<AppState>,
    Json(notification): Json<Notification>,
) -> Result<Json<RelayResponse>, AppError> {
    let body = serde_json::to_string(&notification).unwrap_or_default();
    tracing::info!(payload = %preview(&body, LOG_PREVIEW_CHARS), "Received webhook");

    let message = ChatMessage {
        text: notification.display_text(),
    };

    state.chat_provider.send(&message).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to relay notification");
        e
    })?;

    Ok(Json(RelayResponse {
        success: true,
        message: "Notification sent".to_string(),
    }))
}

/// First `limit` characters of `s`, respecting char boundaries.
fn preview(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_truncates_long_input() {
        let long = "x".repeat(300);
        assert_eq!(preview(&long, 200).len(), 200);
    }

    #[test]
    fn preview_keeps_short_input_whole() {
        assert_eq!(preview("short", 200), "short");
    }

    #[test]
    fn preview_respects_multibyte_boundaries() {
        let text = "📈".repeat(5);
        assert_eq!(preview(&text, 3), "📈📈📈");
    }
}
