//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::RoomServiceError;
use crate::infrastructure::token::TokenError;

/// Errors from the stream-creation use case.
#[derive(Debug, Error)]
pub enum CreateStreamError {
    #[error(transparent)]
    RoomService(#[from] RoomServiceError),

    #[error(transparent)]
    Token(#[from] TokenError),
}
