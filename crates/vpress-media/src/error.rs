//! Error types for media operations.

use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while driving the encoder.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Encoder '{0}' not found in PATH")]
    EncoderNotFound(String),

    #[error("Encoder command failed: {message}")]
    EncoderFailed {
        message: String,
        exit_code: Option<i32>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MediaError {
    /// Create an encoder failure error.
    pub fn encoder_failed(message: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::EncoderFailed {
            message: message.into(),
            exit_code,
        }
    }
}
