//! Shared test fixtures: an in-process server and a recording room service
//! double.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clap::Parser;

use stagedoor::config::ServerConfig;
use stagedoor::domain::{
    ParticipantMetadata, ParticipantPermission, RoomMetadata, RoomServiceClient, RoomServiceError,
};
use stagedoor::infrastructure::token::TokenSigner;
use stagedoor::ui::state::AppState;

/// One observed room service call.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
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

/// Room service double that records every call instead of talking to a
/// server, optionally failing each call with a fixed error.
#[derive(Clone, Default)]
pub struct RecordingRoomService {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    fail_with: Option<RoomServiceError>,
}

impl RecordingRoomService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: RoomServiceError) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(error),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, RecordedCall::UpdateParticipant { .. }))
            .collect()
    }
}

#[async_trait]
impl RoomServiceClient for RecordingRoomService {
    async fn create_room(
        &self,
        name: &str,
        metadata: RoomMetadata,
    ) -> Result<(), RoomServiceError> {
        self.calls.lock().unwrap().push(RecordedCall::CreateRoom {
            name: name.to_string(),
            metadata,
        });
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
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
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Delay used for the creator-flag update in tests; short enough to wait out.
pub const TEST_CREATOR_FLAG_DELAY_MS: u64 = 200;

pub const TEST_API_KEY: &str = "devkey";
pub const TEST_API_SECRET: &str = "testsecret";

fn test_config() -> ServerConfig {
    let delay = TEST_CREATOR_FLAG_DELAY_MS.to_string();
    ServerConfig::parse_from([
        "stagedoor-server",
        "--api-key",
        TEST_API_KEY,
        "--api-secret",
        TEST_API_SECRET,
        "--creator-flag-delay-ms",
        &delay,
    ])
}

/// In-process server bound to an ephemeral port.
pub struct TestServer {
    base_url: String,
    pub service: RecordingRoomService,
}

impl TestServer {
    /// Start the app with the given room service double behind it.
    pub async fn start(service: RecordingRoomService) -> Self {
        let signer = Arc::new(TokenSigner::new(TEST_API_KEY, TEST_API_SECRET));
        let state = Arc::new(AppState::new(
            test_config(),
            signer,
            Arc::new(service.clone()),
        ));
        let app = stagedoor::router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has no local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            service,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
