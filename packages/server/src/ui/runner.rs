//! Server assembly and startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    infrastructure::{
        InMemoryComplaintRepository, InMemoryLikeCache, InMemoryMessageRepository,
        InMemoryPresenceRegistry, TrustedIdentityVerifier,
    },
    ui::{
        handler::{http, websocket},
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Build the default state: in-memory stores and the trusting identity
/// collaborator.
pub fn build_state() -> Arc<AppState> {
    Arc::new(AppState::new(
        Arc::new(InMemoryPresenceRegistry::new()),
        Arc::new(InMemoryMessageRepository::new()),
        Arc::new(InMemoryComplaintRepository::new()),
        Arc::new(InMemoryLikeCache::new()),
        Arc::new(TrustedIdentityVerifier),
    ))
}

/// Build the router over a given state.
///
/// Kept separate from [`run_server`] so tests can serve the same routes on an
/// ephemeral port.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(http::health_check))
        .route("/api/presence", get(http::get_presence))
        .route("/api/messages/conversations", get(http::list_conversations))
        .route(
            "/api/messages/conversations/{counterpart}",
            get(http::get_conversation_history),
        )
        .route("/api/complaints/{complaint_id}", get(http::get_complaint_social))
        .route("/chat", get(websocket::websocket_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn run_server(host: &str, port: u16) -> Result<(), std::io::Error> {
    let state = build_state();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
