//! Server startup and routing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::domain::RoomServiceClient;
use crate::infrastructure::{HttpRoomServiceClient, token::TokenSigner};
use crate::ui::{handler, signal, state::AppState};

/// Build the router over the given state.
///
/// Exposed separately so integration tests can serve the app with test
/// doubles behind the state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/token", get(handler::token))
        .route("/createStream", get(handler::create_stream))
        .route("/joinStream", get(handler::join_stream))
        .route("/inviteToStage", get(handler::invite_to_stage))
        .route("/removeFromStage", get(handler::remove_from_stage))
        .route("/requestToJoin", get(handler::request_to_join))
        .route("/api/health", get(handler::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until ctrl-c or SIGTERM.
pub async fn run_server(config: ServerConfig) -> Result<(), std::io::Error> {
    let signer = Arc::new(TokenSigner::new(
        config.api_key.clone(),
        &config.api_secret,
    ));
    let room_service: Arc<dyn RoomServiceClient> = Arc::new(HttpRoomServiceClient::new(
        config.livekit_host.clone(),
        Arc::clone(&signer),
    ));

    let port = config.port;
    let state = Arc::new(AppState::new(config, signer, room_service));
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal::shutdown_signal())
        .await
}
