//! HTTP API endpoint handlers.
//!
//! Handlers only translate query parameters into use case calls and map
//! errors to bare status codes: 400 for a missing required parameter, 500
//! for any external-service failure. Error responses carry no body.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::infrastructure::dto::http::{CreateStreamResponse, JoinStreamResponse, TokenResponse};
use crate::ui::state::AppState;

/// Query parameters for stream creation
#[derive(Debug, Deserialize)]
pub struct CreateStreamQuery {
    #[serde(rename = "creatorName")]
    pub creator_name: Option<String>,
}

/// Query parameters shared by the join and stage endpoints
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Issue a generic viewer token for the fixed room
pub async fn token(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TokenResponse>, StatusCode> {
    tracing::info!("token requested");

    let token = state.issue_token.execute().map_err(|e| {
        tracing::error!("token signing failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(TokenResponse {
        token,
        url: state.config.livekit_url.clone(),
    }))
}

/// Create the room and respond with the owner's token
pub async fn create_stream(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CreateStreamQuery>,
) -> Result<Json<CreateStreamResponse>, StatusCode> {
    tracing::info!("createStream requested");

    let token = state
        .create_stream
        .execute(query.creator_name)
        .await
        .map_err(|e| {
            tracing::error!("createStream failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(CreateStreamResponse {
        livekit_url: state.config.livekit_url.clone(),
        token,
    }))
}

/// Issue a subscriber-only token for a viewer joining the stream
pub async fn join_stream(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> Result<Json<JoinStreamResponse>, StatusCode> {
    tracing::info!("joinStream requested");

    let token = state.join_stream.execute(query.name).map_err(|e| {
        tracing::error!("joinStream token signing failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(JoinStreamResponse {
        livekit_url: state.config.livekit_url.clone(),
        token,
    }))
}

/// Elevate a participant to the stage
pub async fn invite_to_stage(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> StatusCode {
    tracing::info!("inviteToStage requested");

    let Some(identity) = query.name else {
        return StatusCode::BAD_REQUEST;
    };

    match state.stage.invite(&identity).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!("inviteToStage failed for {identity}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Remove a participant from the stage
pub async fn remove_from_stage(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> StatusCode {
    tracing::info!("removeFromStage requested");

    let Some(identity) = query.name else {
        return StatusCode::BAD_REQUEST;
    };

    match state.stage.remove(&identity).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!("removeFromStage failed for {identity}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Record a participant's request to join the stage
pub async fn request_to_join(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> StatusCode {
    tracing::info!("requestToJoin requested");

    let Some(identity) = query.name else {
        return StatusCode::BAD_REQUEST;
    };

    match state.stage.request_join(&identity).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!("requestToJoin failed for {identity}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
