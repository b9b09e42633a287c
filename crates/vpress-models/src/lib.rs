//! Shared data models for the vpress backend.
//!
//! This crate provides:
//! - Storage-key naming and filename sanitization
//! - The validated upload payload and gatekeeper constants
//! - Publish state as observed through the durable store

pub mod naming;
pub mod payload;
pub mod status;

// Re-export common types
pub use naming::{
    sanitize_file_name, KeyPlan, PUBLISHED_CONTENT_TYPE, PUBLISHED_EXTENSION, UPLOADS_PREFIX,
    VIDEOS_PREFIX,
};
pub use payload::{
    is_accepted_content_type, UploadPayload, ACCEPTED_VIDEO_TYPES, MAX_UPLOAD_BYTES,
};
pub use status::{format_bytes, PublishState};
