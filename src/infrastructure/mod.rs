//! Infrastructure layer: token signing, the HTTP room service client, and
//! response DTOs.

pub mod dto;
pub mod room_service;
pub mod token;

pub use room_service::HttpRoomServiceClient;
pub use token::{TokenError, TokenSigner};
