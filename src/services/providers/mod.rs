pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

pub use telegram::{MockChatProvider, TelegramProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Send error: {0}")]
    SendFailed(String),
}

#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub provider_id: Option<String>,
}

impl ProviderResponse {
    pub fn success(provider_id: Option<String>) -> Self {
        Self { provider_id }
    }
}

/// A message destined for the configured chat.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub text: String,
}

/// Outbound seam to the messaging provider. One call per relay, no retries.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn send(&self, message: &ChatMessage) -> Result<ProviderResponse, ProviderError>;
}
