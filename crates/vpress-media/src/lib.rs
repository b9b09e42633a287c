//! FFmpeg CLI wrapper for video transcoding.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building (argument vectors, never a shell)
//! - A child-process runner gated on exit status alone
//! - Advisory progress parsing from `-progress pipe:2`
//! - Scratch-file helpers for staging encoder input/output

pub mod command;
pub mod error;
pub mod progress;
pub mod scratch;

pub use command::{FfmpegCommand, FfmpegRunner};
pub use error::{MediaError, MediaResult};
pub use progress::FfmpegProgress;
pub use scratch::{remove_scratch_file, write_scratch_file};
