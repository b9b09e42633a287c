//! Pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

use vpress_storage::StorageError;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors from the transcode-and-publish pipeline.
///
/// Only `Staging` can reach an upload's caller: it happens before the
/// response is sent. `EncodeFailed` and `Publish` occur in the detached
/// task and are logged, never surfaced.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Staging write failed for {path}: {source}")]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encode failed: {reason}")]
    EncodeFailed { reason: String },

    #[error("Publish failed: {0}")]
    Publish(#[from] StorageError),
}

impl PipelineError {
    /// Create an encode failure.
    pub fn encode_failed(reason: impl Into<String>) -> Self {
        Self::EncodeFailed {
            reason: reason.into(),
        }
    }
}
