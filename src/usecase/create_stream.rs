//! UseCase: create a stream.
//!
//! Creates the room with livestream metadata attached, signs an owner token,
//! and schedules a detached, best-effort update that marks the creator in the
//! participant metadata after a fixed delay. The caller gets its response
//! before that update fires; the `isCreator` flag is eventually consistent.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::config::ServerConfig;
use crate::domain::{
    AccessGrant, Identity, LivestreamInfo, ParticipantMetadata, RoomMetadata, RoomServiceClient,
    VideoGrants,
};
use crate::infrastructure::token::TokenSigner;

use super::error::CreateStreamError;

/// Creates the room and issues the owner's token.
pub struct CreateStreamUseCase {
    signer: Arc<TokenSigner>,
    room_service: Arc<dyn RoomServiceClient>,
    config: Arc<ServerConfig>,
}

impl CreateStreamUseCase {
    pub fn new(
        signer: Arc<TokenSigner>,
        room_service: Arc<dyn RoomServiceClient>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            signer,
            room_service,
            config,
        }
    }

    /// Create the room and sign a full-admin token for the creator.
    ///
    /// A blank or missing `creator_name` is replaced with a random one.
    pub async fn execute(
        &self,
        creator_name: Option<String>,
    ) -> Result<String, CreateStreamError> {
        let creator_name = creator_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let metadata = RoomMetadata {
            livestream: LivestreamInfo {
                code: self.config.stream_code.clone(),
                url: self.config.join_url.clone(),
            },
        };
        self.room_service
            .create_room(&self.config.room_name, metadata)
            .await?;

        let identity = Identity::owner();
        let grant = AccessGrant::new(
            identity.clone(),
            creator_name.as_str(),
            VideoGrants::admin(self.config.room_name.as_str()),
        );
        let token = self.signer.sign(&grant)?;

        self.spawn_creator_flag_update(identity, creator_name);

        Ok(token)
    }

    /// Schedule the delayed `isCreator` metadata update.
    ///
    /// Fire-and-forget, at most once: the task holds no cancellation hook and
    /// a failure is logged and dropped, never surfaced to any caller.
    fn spawn_creator_flag_update(&self, identity: Identity, creator_name: String) {
        let room_service = Arc::clone(&self.room_service);
        let room = self.config.room_name.clone();
        let delay = Duration::from_millis(self.config.creator_flag_delay_ms);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = room_service
                .update_participant(
                    &room,
                    identity.as_str(),
                    Some(creator_name),
                    ParticipantMetadata::creator(),
                    None,
                )
                .await;
            if let Err(e) = result {
                tracing::warn!("creator flag update for {identity} dropped: {e}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ParticipantPermission, RoomServiceError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum RecordedCall {
        CreateRoom {
            name: String,
            metadata: RoomMetadata,
        },
        UpdateParticipant {
            room: String,
            identity: String,
            name: Option<String>,
            metadata: ParticipantMetadata,
            permission: Option<ParticipantPermission>,
        },
    }

    #[derive(Default)]
    struct RecordingClient {
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl RecordingClient {
        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RoomServiceClient for RecordingClient {
        async fn create_room(
            &self,
            name: &str,
            metadata: RoomMetadata,
        ) -> Result<(), RoomServiceError> {
            self.calls.lock().unwrap().push(RecordedCall::CreateRoom {
                name: name.to_string(),
                metadata,
            });
            Ok(())
        }

        async fn update_participant(
            &self,
            room: &str,
            identity: &str,
            name: Option<String>,
            metadata: ParticipantMetadata,
            permission: Option<ParticipantPermission>,
        ) -> Result<(), RoomServiceError> {
            self.calls
                .lock()
                .unwrap()
                .push(RecordedCall::UpdateParticipant {
                    room: room.to_string(),
                    identity: identity.to_string(),
                    name,
                    metadata,
                    permission,
                });
            Ok(())
        }
    }

    fn test_config() -> Arc<ServerConfig> {
        use clap::Parser;
        Arc::new(ServerConfig::parse_from([
            "stagedoor-server",
            "--api-key",
            "devkey",
            "--api-secret",
            "secret",
        ]))
    }

    fn usecase(client: Arc<RecordingClient>) -> CreateStreamUseCase {
        CreateStreamUseCase::new(
            Arc::new(TokenSigner::new("devkey", "secret")),
            client,
            test_config(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_room_created_with_livestream_metadata() {
        let client = Arc::new(RecordingClient::default());
        let token = usecase(client.clone())
            .execute(Some("Alice".to_string()))
            .await
            .unwrap();
        assert!(!token.is_empty());

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            RecordedCall::CreateRoom {
                name: "myroom".to_string(),
                metadata: RoomMetadata {
                    livestream: LivestreamInfo {
                        code: "fdsa".to_string(),
                        url: "http://example.com".to_string(),
                    },
                },
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_creator_flag_update_fires_only_after_delay() {
        let client = Arc::new(RecordingClient::default());
        usecase(client.clone())
            .execute(Some("Alice".to_string()))
            .await
            .unwrap();

        // Let the detached task start and park on its timer.
        tokio::task::yield_now().await;
        assert_eq!(client.calls().len(), 1, "no update before the delay");

        // Paused clock: sleeping past the delay wakes the detached task first.
        tokio::time::sleep(Duration::from_millis(2600)).await;
        tokio::task::yield_now().await;

        let calls = client.calls();
        assert_eq!(calls.len(), 2);
        match &calls[1] {
            RecordedCall::UpdateParticipant {
                room,
                identity,
                name,
                metadata,
                permission,
            } => {
                assert_eq!(room, "myroom");
                assert!(identity.starts_with("owner-"));
                assert_eq!(name.as_deref(), Some("Alice"));
                assert_eq!(metadata, &ParticipantMetadata::creator());
                assert!(permission.is_none());
            }
            other => panic!("expected update call, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_creator_name_gets_randomized() {
        let client = Arc::new(RecordingClient::default());
        let usecase = usecase(client.clone());
        usecase.execute(Some("   ".to_string())).await.unwrap();

        tokio::time::sleep(Duration::from_millis(2600)).await;
        tokio::task::yield_now().await;

        let calls = client.calls();
        match &calls[1] {
            RecordedCall::UpdateParticipant { name, .. } => {
                let name = name.as_deref().unwrap();
                assert!(!name.trim().is_empty());
                assert!(Uuid::parse_str(name).is_ok());
            }
            other => panic!("expected update call, got {other:?}"),
        }
    }
}
