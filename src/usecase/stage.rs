//! UseCase: stage membership changes.
//!
//! Invite a participant to the stage, remove one from it, or record a join
//! request. Each operation is a single full-overwrite metadata update; the
//! room service holds all durable state.

use std::sync::Arc;

use crate::domain::{
    ParticipantMetadata, ParticipantPermission, RoomServiceClient, RoomServiceError,
};

/// Applies stage membership changes for the fixed room.
pub struct ManageStageUseCase {
    room_service: Arc<dyn RoomServiceClient>,
    room_name: String,
}

impl ManageStageUseCase {
    pub fn new(room_service: Arc<dyn RoomServiceClient>, room_name: String) -> Self {
        Self {
            room_service,
            room_name,
        }
    }

    /// Elevate a participant to the stage and grant publish capability.
    pub async fn invite(&self, identity: &str) -> Result<(), RoomServiceError> {
        self.room_service
            .update_participant(
                &self.room_name,
                identity,
                None,
                ParticipantMetadata::on_stage(),
                Some(ParticipantPermission::publisher()),
            )
            .await
    }

    /// Reset a participant to defaults and revoke publish capability.
    ///
    /// The metadata record is the default one: prior `isOnStage`, `isCreator`
    /// and `avatarUrl` values are never preserved.
    pub async fn remove(&self, identity: &str) -> Result<(), RoomServiceError> {
        self.room_service
            .update_participant(
                &self.room_name,
                identity,
                None,
                ParticipantMetadata::default(),
                Some(ParticipantPermission::default()),
            )
            .await
    }

    /// Record that a participant wants to join the stage. No permission change.
    pub async fn request_join(&self, identity: &str) -> Result<(), RoomServiceError> {
        self.room_service
            .update_participant(
                &self.room_name,
                identity,
                None,
                ParticipantMetadata::join_request(),
                None,
            )
            .await
    }
}
