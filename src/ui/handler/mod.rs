//! Handler modules for the HTTP endpoints.

pub mod http;

pub use http::{
    create_stream, health_check, invite_to_stage, join_stream, remove_from_stage, request_to_join,
    token,
};
