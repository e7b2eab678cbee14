//! HTTP handlers for the relay: status, health, webhook intake, and the
//! canary test message.

pub mod canary;
pub mod health;
pub mod status;
pub mod webhook;

pub use canary::send_canary;
pub use health::health_check;
pub use status::status;
pub use webhook::receive_webhook;

use serde::Serialize;

/// Response body shared by the relaying endpoints.
#[derive(Debug, Serialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
}
