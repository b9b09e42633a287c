//! S3-compatible durable store client.
//!
//! This crate provides:
//! - Object upload with per-object visibility (public artifacts, private
//!   originals)
//! - Existence probing (the sole status signal of the system)
//! - Prefix listing for the published-artifact read path
//! - Public URL derivation from the store's canonical public address
//!
//! Objects are written append-only: this core never mutates or deletes a
//! key once created. Retention is an external concern.

pub mod client;
pub mod config;
pub mod error;

pub use client::{ObjectInfo, ObjectVisibility, StoreClient};
pub use config::StorageConfig;
pub use error::{StorageError, StorageResult};
