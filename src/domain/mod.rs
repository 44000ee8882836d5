//! Domain layer for the stage-management facade.
//!
//! This module contains the metadata schema and the token-grant model that
//! every endpoint produces or consumes, independent of HTTP and transport
//! concerns.

pub mod entity;
pub mod error;
pub mod room_service;
pub mod value_object;

pub use entity::{
    AccessGrant, LivestreamInfo, ParticipantMetadata, ParticipantPermission, RoomMetadata,
    VideoGrants,
};
pub use error::RoomServiceError;
pub use room_service::RoomServiceClient;
pub use value_object::Identity;
