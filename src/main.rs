use telegram_relay::config::RelayConfig;
use telegram_relay::observability::init_tracing;
use telegram_relay::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("info");

    let config = RelayConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    tracing::info!(
        chat_id = %config.telegram.chat_id,
        "Relaying notifications to Telegram"
    );

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start relay: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
