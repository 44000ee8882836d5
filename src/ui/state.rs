//! Shared application state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::domain::RoomServiceClient;
use crate::infrastructure::token::TokenSigner;
use crate::usecase::{
    CreateStreamUseCase, IssueTokenUseCase, JoinStreamUseCase, ManageStageUseCase,
};

/// Shared application state: the configuration plus one use case per
/// operation family. Stateless beyond configuration; all durable state lives
/// in the external room service.
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub issue_token: IssueTokenUseCase,
    pub create_stream: CreateStreamUseCase,
    pub join_stream: JoinStreamUseCase,
    pub stage: ManageStageUseCase,
}

impl AppState {
    /// Wire the use cases from the configuration and collaborators.
    pub fn new(
        config: ServerConfig,
        signer: Arc<TokenSigner>,
        room_service: Arc<dyn RoomServiceClient>,
    ) -> Self {
        let config = Arc::new(config);
        Self {
            issue_token: IssueTokenUseCase::new(Arc::clone(&signer), config.room_name.clone()),
            create_stream: CreateStreamUseCase::new(
                Arc::clone(&signer),
                Arc::clone(&room_service),
                Arc::clone(&config),
            ),
            join_stream: JoinStreamUseCase::new(signer, config.room_name.clone()),
            stage: ManageStageUseCase::new(room_service, config.room_name.clone()),
            config,
        }
    }
}
