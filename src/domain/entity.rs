//! Core domain models for the stage-management facade.
//!
//! All records here are flat and immutable once constructed. They are
//! serialized with the exact wire field names the LiveKit clients expect,
//! so the serde renames are part of the contract.

use serde::{Deserialize, Serialize};

use super::value_object::Identity;

/// Capability flags embedded in an access token's `video` claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrants {
    /// Room the grant is scoped to
    pub room: String,
    pub room_create: bool,
    pub room_join: bool,
    pub room_admin: bool,
    pub can_publish: bool,
    pub can_publish_data: bool,
    pub can_subscribe: bool,
}

impl VideoGrants {
    /// Full set of capabilities, handed to the room owner.
    pub fn admin(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            room_create: true,
            room_join: true,
            room_admin: true,
            can_publish: true,
            can_publish_data: true,
            can_subscribe: true,
        }
    }

    /// Subscriber-only capabilities: join, watch, and send data messages.
    pub fn viewer(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            room_create: false,
            room_join: true,
            room_admin: false,
            can_publish: false,
            can_publish_data: true,
            can_subscribe: true,
        }
    }
}

/// Access grant for a single participant: identity, display name, and
/// capabilities. Constructed per request, immediately signed into a token,
/// then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGrant {
    pub identity: Identity,
    pub name: String,
    pub video: VideoGrants,
}

impl AccessGrant {
    pub fn new(identity: Identity, name: impl Into<String>, video: VideoGrants) -> Self {
        Self {
            identity,
            name: name.into(),
            video,
        }
    }
}

/// Room-scoped metadata attached at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMetadata {
    pub livestream: LivestreamInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivestreamInfo {
    /// Short code identifying the stream
    pub code: String,
    /// Url viewers use to join the stream
    pub url: String,
}

/// Per-participant stage state.
///
/// Every update overwrites the full record: setting one flag resets the
/// others to their defaults unless explicitly re-specified. There is no
/// partial merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantMetadata {
    /// true if the participant asked to join the stage
    pub requested: bool,
    /// true if the participant has been invited to the stage and elevated
    pub is_on_stage: bool,
    /// true if the participant created the room
    pub is_creator: bool,
    /// url of the participant's avatar
    pub avatar_url: String,
}

impl ParticipantMetadata {
    /// Metadata for a participant elevated to the stage.
    pub fn on_stage() -> Self {
        Self {
            is_on_stage: true,
            ..Self::default()
        }
    }

    /// Metadata marking the room creator.
    pub fn creator() -> Self {
        Self {
            is_creator: true,
            ..Self::default()
        }
    }

    /// Metadata for a participant asking to join the stage.
    pub fn join_request() -> Self {
        Self {
            requested: true,
            ..Self::default()
        }
    }
}

/// Publish/subscribe permission applied alongside a metadata update.
///
/// The default (all false) revokes publish capability; only `canPublish` is
/// ever toggled by this facade, the other flags keep their protobuf wire
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantPermission {
    pub can_publish: bool,
    pub can_publish_data: bool,
    pub can_subscribe: bool,
}

impl ParticipantPermission {
    /// Permission granting publish capability (stage member).
    pub fn publisher() -> Self {
        Self {
            can_publish: true,
            ..Self::default()
        }
    }
}
