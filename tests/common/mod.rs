use std::sync::Arc;
use std::time::Duration;
use telegram_relay::config::{RelayConfig, TelegramConfig};
use telegram_relay::services::MockChatProvider;
use telegram_relay::startup::Application;

pub struct TestApp {
    pub address: String,
    pub provider: Arc<MockChatProvider>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_provider(Arc::new(MockChatProvider::new())).await
    }

    pub async fn spawn_failing(error: &str) -> Self {
        Self::spawn_with_provider(Arc::new(MockChatProvider::failing(error))).await
    }

    async fn spawn_with_provider(provider: Arc<MockChatProvider>) -> Self {
        // Use random port for testing (port 0)
        let config = RelayConfig {
            port: 0,
            telegram: TelegramConfig {
                bot_token: "123456:test-token".to_string(),
                chat_id: "-1001234567890".to_string(),
            },
        };

        let app = Application::build_with_provider(config, provider.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address, provider }
    }
}
