use super::{ChatMessage, ChatProvider, ProviderError, ProviderResponse};
use crate::config::TelegramConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TelegramProvider {
    config: TelegramConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<SentMessage>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    message_id: i64,
}

impl TelegramProvider {
    pub fn new(config: TelegramConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            TELEGRAM_API_BASE, self.config.bot_token
        )
    }
}

#[async_trait]
impl ChatProvider for TelegramProvider {
    async fn send(&self, message: &ChatMessage) -> Result<ProviderResponse, ProviderError> {
        let request = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text: &message.text,
            parse_mode: "Markdown",
        };

        let response = self
            .client
            .post(self.send_message_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ProviderError::Connection(format!("Failed to reach Telegram: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            // Telegram's error body is logged but never echoed to callers.
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                "Telegram API rejected sendMessage"
            );
            return Err(ProviderError::SendFailed(format!(
                "Telegram API returned status {}",
                status
            )));
        }

        let parsed: SendMessageResponse = response.json().await.map_err(|e| {
            ProviderError::SendFailed(format!("Failed to parse Telegram response: {}", e))
        })?;

        if !parsed.ok {
            let description = parsed
                .description
                .unwrap_or_else(|| "no description".to_string());
            tracing::error!(description = %description, "Telegram API reported failure");
            return Err(ProviderError::SendFailed(
                "Telegram API reported failure".to_string(),
            ));
        }

        let provider_id = parsed.result.map(|m| m.message_id.to_string());
        tracing::info!(message_id = ?provider_id, "Message relayed to Telegram");

        Ok(ProviderResponse::success(provider_id))
    }
}

/// Mock chat provider for tests. Records every sent message and can be
/// configured to fail each send with a fixed error.
pub struct MockChatProvider {
    fail_with: Option<String>,
    sent: Mutex<Vec<ChatMessage>>,
}

impl MockChatProvider {
    pub fn new() -> Self {
        Self {
            fail_with: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            fail_with: Some(error.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().expect("mock state poisoned").len()
    }

    pub fn sent_messages(&self) -> Vec<ChatMessage> {
        self.sent.lock().expect("mock state poisoned").clone()
    }
}

impl Default for MockChatProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn send(&self, message: &ChatMessage) -> Result<ProviderResponse, ProviderError> {
        if let Some(error) = &self.fail_with {
            return Err(ProviderError::SendFailed(error.clone()));
        }

        let mut sent = self.sent.lock().expect("mock state poisoned");
        sent.push(message.clone());

        tracing::info!(
            text_length = %message.text.len(),
            "[MOCK] chat message would be sent"
        );

        Ok(ProviderResponse::success(Some(format!(
            "mock-{}",
            sent.len()
        ))))
    }
}
