//! Livestream stage-management facade server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin stagedoor-server -- --api-key <key> --api-secret <secret>
//! ```

use clap::Parser;

use stagedoor::config::ServerConfig;
use stagedoor::logger::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::parse();

    // Run the server
    if let Err(e) = stagedoor::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
