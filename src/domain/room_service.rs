//! Room service capability interface.
//!
//! The domain layer defines the trait; the infrastructure layer provides the
//! HTTP implementation (dependency inversion). Use cases depend only on this
//! trait, which also keeps them testable with a mock.

use async_trait::async_trait;

use super::{
    entity::{ParticipantMetadata, ParticipantPermission, RoomMetadata},
    error::RoomServiceError,
};

/// Administrative interface of the external media server.
///
/// The facade never inspects result payloads beyond success/failure, so both
/// operations return `()` on success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomServiceClient: Send + Sync {
    /// Create a room with the given metadata attached.
    async fn create_room(
        &self,
        name: &str,
        metadata: RoomMetadata,
    ) -> Result<(), RoomServiceError>;

    /// Overwrite a participant's metadata and, optionally, its permission.
    async fn update_participant(
        &self,
        room: &str,
        identity: &str,
        name: Option<String>,
        metadata: ParticipantMetadata,
        permission: Option<ParticipantPermission>,
    ) -> Result<(), RoomServiceError>;
}
