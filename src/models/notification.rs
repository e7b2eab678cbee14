use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body text used when the incoming notification carries no message.
pub const DEFAULT_MESSAGE: &str = "Notification from ApollonixAI";

/// An incoming webhook notification. Constructed from the request body,
/// relayed once, then discarded; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Open-ended tag; the four known values select an emoji prefix.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
    /// Opaque payload, carried through but never inspected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Notification {
    /// Format the display text sent to the chat: an emoji prefix selected by
    /// exact match on the notification type, then the message body (or the
    /// default when the message is absent or empty). No escaping or
    /// truncation is applied.
    pub fn display_text(&self) -> String {
        let body = match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_MESSAGE,
        };

        match self.kind.as_deref() {
            Some("position_opened") => format!("🟢 {}", body),
            Some("position_closed") => format!("💰 {}", body),
            Some("signal") => format!("📈 {}", body),
            Some("error") => format!("🚨 {}", body),
            _ => body.to_string(),
        }
    }
}
