//! HTTP API response DTOs.
//!
//! Pure output shapes, never persisted. Field names are part of the client
//! contract.

use serde::{Deserialize, Serialize};

/// Response for the generic viewer token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub url: String,
}

/// Response for stream creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStreamResponse {
    pub livekit_url: String,
    pub token: String,
}

/// Response for joining a stream as a viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinStreamResponse {
    pub livekit_url: String,
    pub token: String,
}
