//! tanya-web — Axum server hosting the portfolio chat assistant.
//! Builds one conversation engine and serves it over REST + WebSocket.

mod server;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use tanya_core::config::EngineConfig;
use tanya_core::engine::ConversationEngine;

use server::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = EngineConfig::load_from_dir(&project_root).unwrap_or_default();
    let assistant_name = config.assistant_name.clone();

    let engine = ConversationEngine::new(config);
    let handle = engine.handle();

    tokio::spawn(engine.run());
    info!("Conversation engine started for {}", assistant_name);

    let state = Arc::new(AppState {
        handle: handle.clone(),
        assistant_name,
        project_root,
    });

    let app = server::router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = format!("0.0.0.0:{}", port);

    eprintln!("  Chat widget API on http://localhost:{}\n", port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind port");

    // Graceful shutdown on Ctrl+C
    let shutdown = async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Shutdown signal received, stopping engine...");
        let _ = handle.stop().await;
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .expect("Server error");

    info!("Server stopped.");
}
