//! Application startup and lifecycle management.

use crate::config::RelayConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{ChatProvider, TelegramProvider};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state. Immutable after startup; handlers hold no other
/// state, so concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: RelayConfig,
    pub chat_provider: Arc<dyn ChatProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the production Telegram provider.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let provider = TelegramProvider::new(config.telegram.clone())?;
        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application with an injected provider. Tests use this to
    /// substitute a mock for the Telegram API.
    pub async fn build_with_provider(
        config: RelayConfig,
        chat_provider: Arc<dyn ChatProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            chat_provider,
        };

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Telegram relay listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Build the HTTP router over the given state.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::status))
            .route("/health", get(handlers::health_check))
            .route("/webhook", post(handlers::receive_webhook))
            .route("/test", post(handlers::send_canary))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = Self::router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
