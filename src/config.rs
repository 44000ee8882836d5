//! Server configuration.
//!
//! Loaded once at process start and passed into the facade's constructor.
//! Every value can be set either as a CLI flag or an environment variable.

use clap::Parser;

/// Configuration for the stage-management facade.
#[derive(Debug, Clone, Parser)]
#[command(name = "stagedoor-server", about = "Livestream stage-management facade")]
pub struct ServerConfig {
    /// Port the HTTP server listens on
    #[arg(long, env = "STAGEDOOR_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Base URL of the LiveKit server API (room service)
    #[arg(long, env = "LIVEKIT_HOST", default_value = "http://localhost:7880")]
    pub livekit_host: String,

    /// API key used for token signing and server-to-server calls
    #[arg(long, env = "LIVEKIT_API_KEY")]
    pub api_key: String,

    /// API secret paired with the key
    #[arg(long, env = "LIVEKIT_API_SECRET")]
    pub api_secret: String,

    /// Name of the single room this facade manages
    #[arg(long, env = "STAGEDOOR_ROOM", default_value = "myroom")]
    pub room_name: String,

    /// WebSocket URL handed to media clients in token responses
    #[arg(long, env = "STAGEDOOR_LIVEKIT_URL", default_value = "ws://localhost:7880")]
    pub livekit_url: String,

    /// Short code attached to the room as livestream metadata
    #[arg(long, env = "STAGEDOOR_STREAM_CODE", default_value = "fdsa")]
    pub stream_code: String,

    /// Join URL attached to the room as livestream metadata
    #[arg(long, env = "STAGEDOOR_JOIN_URL", default_value = "http://example.com")]
    pub join_url: String,

    /// Delay before the post-response creator-flag update fires (milliseconds)
    #[arg(long, env = "STAGEDOOR_CREATOR_FLAG_DELAY_MS", default_value_t = 2500)]
    pub creator_flag_delay_ms: u64,
}
