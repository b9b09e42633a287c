//! Axum HTTP API server.
//!
//! This crate provides:
//! - The multipart upload gatekeeper (MIME allowlist, byte ceiling)
//! - Upload, conversion-status and published-listing routes
//! - Health and readiness probes

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
