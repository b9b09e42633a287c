//! Asynchronous transcode-and-publish pipeline.
//!
//! This crate provides:
//! - Local staging of uploaded bytes for the file-based encoder
//! - The transcode orchestrator (child-process supervision, outcome
//!   classification)
//! - The publish pipeline (backup original, publish output, scoped cleanup)
//! - Detached-job spawning with no caller-visible handle
//! - The status oracle (existence probe against the durable store)
//!
//! Control flow for one upload: stage → predict keys → return URL to the
//! caller → detached task: encode → publish → cleanup. Each job owns a
//! disjoint set of local paths and remote keys by construction of the
//! naming scheme, so jobs never coordinate.

pub mod config;
pub mod error;
pub mod oracle;
pub mod pipeline;
pub mod spawner;
pub mod staging;
pub mod transcode;

pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use oracle::{StatusOracle, StatusReport};
pub use pipeline::{SubmitReceipt, TranscodePipeline};
pub use spawner::JobSpawner;
pub use staging::{stage_upload, StagedFile};
pub use transcode::Transcoder;
