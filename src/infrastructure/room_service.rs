//! HTTP implementation of the room service client.
//!
//! Speaks LiveKit's Twirp-style JSON API. Metadata records are serialized to
//! JSON strings because the room service treats metadata as an opaque string
//! field. Every request carries a freshly signed admin token.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{
    AccessGrant, Identity, ParticipantMetadata, ParticipantPermission, RoomMetadata,
    RoomServiceClient, RoomServiceError, VideoGrants,
};
use crate::infrastructure::token::TokenSigner;

/// Identity used for server-to-server calls.
const SERVICE_IDENTITY: &str = "stagedoor-service";

#[derive(Debug, Serialize)]
struct CreateRoomRequest<'a> {
    name: &'a str,
    metadata: String,
}

#[derive(Debug, Serialize)]
struct UpdateParticipantRequest<'a> {
    room: &'a str,
    identity: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    metadata: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    permission: Option<&'a ParticipantPermission>,
}

/// Room service client backed by reqwest.
///
/// No retries: a failed call surfaces as a single error, matching the
/// facade's at-most-once semantics.
pub struct HttpRoomServiceClient {
    http: reqwest::Client,
    host: String,
    signer: Arc<TokenSigner>,
}

impl HttpRoomServiceClient {
    pub fn new(host: impl Into<String>, signer: Arc<TokenSigner>) -> Self {
        Self {
            http: reqwest::Client::new(),
            host: host.into(),
            signer,
        }
    }

    async fn post<T: Serialize>(
        &self,
        method: &str,
        room: &str,
        body: &T,
    ) -> Result<(), RoomServiceError> {
        let grant = AccessGrant::new(
            Identity::new(SERVICE_IDENTITY.to_string()),
            SERVICE_IDENTITY,
            VideoGrants::admin(room),
        );
        let token = self
            .signer
            .sign(&grant)
            .map_err(|e| RoomServiceError::Token(e.to_string()))?;

        let url = format!("{}/twirp/livekit.RoomService/{method}", self.host);
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| RoomServiceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RoomServiceError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl RoomServiceClient for HttpRoomServiceClient {
    async fn create_room(
        &self,
        name: &str,
        metadata: RoomMetadata,
    ) -> Result<(), RoomServiceError> {
        let request = CreateRoomRequest {
            name,
            metadata: serde_json::to_string(&metadata)
                .map_err(|e| RoomServiceError::Serialize(e.to_string()))?,
        };
        self.post("CreateRoom", name, &request).await
    }

    async fn update_participant(
        &self,
        room: &str,
        identity: &str,
        name: Option<String>,
        metadata: ParticipantMetadata,
        permission: Option<ParticipantPermission>,
    ) -> Result<(), RoomServiceError> {
        let request = UpdateParticipantRequest {
            room,
            identity,
            name: name.as_deref(),
            metadata: serde_json::to_string(&metadata)
                .map_err(|e| RoomServiceError::Serialize(e.to_string()))?,
            permission: permission.as_ref(),
        };
        self.post("UpdateParticipant", room, &request).await
    }
}
