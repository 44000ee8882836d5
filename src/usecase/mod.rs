//! UseCase layer.
//!
//! One use case per operation family. Each holds the collaborators it needs
//! (token signer, room service client) behind `Arc`, and is called from the
//! UI layer's handlers.

pub mod create_stream;
pub mod error;
pub mod issue_token;
pub mod join_stream;
pub mod stage;

pub use create_stream::CreateStreamUseCase;
pub use error::CreateStreamError;
pub use issue_token::IssueTokenUseCase;
pub use join_stream::JoinStreamUseCase;
pub use stage::ManageStageUseCase;
