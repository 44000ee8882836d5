//! UseCase: issue a generic viewer token.

use std::sync::Arc;

use crate::domain::{AccessGrant, Identity, VideoGrants};
use crate::infrastructure::token::{TokenError, TokenSigner};

/// Issues viewer tokens for the fixed room.
pub struct IssueTokenUseCase {
    signer: Arc<TokenSigner>,
    room_name: String,
}

impl IssueTokenUseCase {
    pub fn new(signer: Arc<TokenSigner>, room_name: String) -> Self {
        Self { signer, room_name }
    }

    /// Build and sign a grant for a fresh `user-<uuid>` viewer identity.
    pub fn execute(&self) -> Result<String, TokenError> {
        let grant = AccessGrant::new(
            Identity::viewer(),
            "user",
            VideoGrants::viewer(self.room_name.as_str()),
        );
        self.signer.sign(&grant)
    }
}
