//! Domain layer error definitions.

use thiserror::Error;

/// Errors returned by a room service client.
///
/// Kept infrastructure-agnostic: transport details are flattened to strings
/// so the trait can live in the domain layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomServiceError {
    /// The request never completed (connection error, timeout, ...)
    #[error("room service request failed: {0}")]
    Request(String),

    /// The room service answered with a non-success status
    #[error("room service returned status {0}")]
    Status(u16),

    /// A metadata record could not be serialized for the wire
    #[error("metadata serialization failed: {0}")]
    Serialize(String),

    /// The service token for the request could not be signed
    #[error("failed to sign service token: {0}")]
    Token(String),
}
