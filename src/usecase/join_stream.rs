//! UseCase: join a stream as a viewer.

use std::sync::Arc;

use crate::domain::{AccessGrant, Identity, VideoGrants};
use crate::infrastructure::token::{TokenError, TokenSigner};

/// Issues subscriber-only tokens for viewers joining the stream.
pub struct JoinStreamUseCase {
    signer: Arc<TokenSigner>,
    room_name: String,
}

impl JoinStreamUseCase {
    pub fn new(signer: Arc<TokenSigner>, room_name: String) -> Self {
        Self { signer, room_name }
    }

    /// Build and sign a subscriber-only grant for a fresh identity.
    ///
    /// The display name is taken verbatim from the caller and may be empty.
    pub fn execute(&self, name: Option<String>) -> Result<String, TokenError> {
        let grant = AccessGrant::new(
            Identity::owner(),
            name.unwrap_or_default(),
            VideoGrants::viewer(self.room_name.as_str()),
        );
        self.signer.sign(&grant)
    }
}
