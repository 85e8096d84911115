//! Web server — Axum router + shared state.

pub mod api;
pub mod ws;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use tanya_core::engine::ConversationHandle;

/// Shared application state — one conversation per server instance.
pub struct AppState {
    pub handle: ConversationHandle,
    pub assistant_name: String,
    pub project_root: PathBuf,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::very_permissive();

    let mut app = Router::new()
        .merge(api::routes())
        .merge(ws::routes())
        .layer(cors)
        .with_state(state.clone());

    // Serve the chat widget build if a public/ directory exists
    let widget_dist = state.project_root.join("public");
    if widget_dist.is_dir() {
        let index_html = widget_dist.join("index.html");
        app = app.fallback_service(
            ServeDir::new(&widget_dist).not_found_service(ServeFile::new(index_html)),
        );
    }

    app
}
