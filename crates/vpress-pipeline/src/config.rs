//! Pipeline configuration.

use std::path::PathBuf;

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory staged inputs and encoder outputs are written to.
    pub staging_dir: PathBuf,
    /// Encoder program name or path.
    pub ffmpeg_program: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            staging_dir: std::env::temp_dir().join("vpress"),
            ffmpeg_program: "ffmpeg".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            staging_dir: std::env::var("STAGING_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir().join("vpress")),
            ffmpeg_program: std::env::var("FFMPEG_PROGRAM").unwrap_or_else(|_| "ffmpeg".to_string()),
        }
    }
}
