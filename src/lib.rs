//! Stagedoor: a stateless HTTP facade for livestream stage management.
//!
//! Six GET endpoints issue signed access tokens and mutate room/participant
//! state by delegating to the LiveKit room service. All durable state lives
//! in the external service; this layer only builds metadata records, signs
//! grants, and forwards calls.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{router, run_server};
