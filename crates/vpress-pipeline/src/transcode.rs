//! Transcode orchestrator.
//!
//! Runs the external encoder against a staged input and classifies the
//! outcome. Success means: exit status 0 AND a non-empty output file.
//! Everything else — spawn error, non-zero exit, unreadable input,
//! missing or empty output — is one `EncodeFailed`, logged and never
//! retried.

use std::path::Path;
use tokio::fs;
use tracing::debug;

use vpress_media::{FfmpegCommand, FfmpegRunner};

use crate::error::{PipelineError, PipelineResult};

/// Fixed publish encoding: Ogg Theora video, Vorbis audio.
const VIDEO_CODEC: &str = "libtheora";
const AUDIO_CODEC: &str = "libvorbis";
const VIDEO_QUALITY: u8 = 5;
const AUDIO_QUALITY: u8 = 4;

/// Orchestrates one encoder invocation per call.
#[derive(Debug, Clone)]
pub struct Transcoder {
    program: String,
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Transcoder {
    /// Create a transcoder driving the given encoder binary.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Transcode `input` into an Ogg Theora/Vorbis file at `output`.
    pub async fn transcode(&self, input: &Path, output: &Path) -> PipelineResult<()> {
        let cmd = FfmpegCommand::new(input, output)
            .video_codec(VIDEO_CODEC)
            .audio_codec(AUDIO_CODEC)
            .video_quality(VIDEO_QUALITY)
            .audio_quality(AUDIO_QUALITY)
            .threads(0);

        let runner = FfmpegRunner::new().with_program(self.program.as_str());
        runner
            .run_with_progress(&cmd, |progress| {
                // Advisory only; correctness never gates on these lines.
                debug!(
                    frame = progress.frame,
                    out_time_ms = progress.out_time_ms,
                    speed = progress.speed,
                    "encode progress"
                );
            })
            .await
            .map_err(|e| PipelineError::encode_failed(e.to_string()))?;

        verify_output(output).await
    }
}

/// An exit status of 0 is not enough: the published object must never be
/// created from a missing or zero-length output file.
async fn verify_output(output: &Path) -> PipelineResult<()> {
    match fs::metadata(output).await {
        Ok(meta) if meta.len() > 0 => Ok(()),
        Ok(_) => Err(PipelineError::encode_failed(format!(
            "encoder produced empty output at {}",
            output.display()
        ))),
        Err(_) => Err(PipelineError::encode_failed(format!(
            "encoder produced no output at {}",
            output.display()
        ))),
    }
}
