use axum::{extract::State, Json};

use super::RelayResponse;
use crate::error::AppError;
use crate::services::ChatMessage;
use crate::startup::AppState;

/// Fixed text sent by `POST /test`, regardless of request body.
pub const CANARY_TEXT: &str = "🧪 *Test Message*\nYour Telegram bot is working!";

#[tracing::instrument(skip(state))]
pub async fn send_canary(State(state): State<AppState>) -> Result<Json<RelayResponse>, AppError> {
    let message = ChatMessage {
        text: CANARY_TEXT.to_string(),
    };

    state.chat_provider.send(&message).await.map_err(|e| {
        tracing::error!(error = %e, "Test message failed");
        e
    })?;

    Ok(Json(RelayResponse {
        success: true,
        message: "Test message sent".to_string(),
    }))
}
