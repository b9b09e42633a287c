//! Local staging of uploaded bytes.
//!
//! The external encoder only does file-based I/O, so the inbound byte
//! buffer is written to a scratch file the orchestrator can point it at.

use std::path::{Path, PathBuf};
use tracing::warn;

use vpress_media::scratch::{remove_scratch_file, write_scratch_file};

use crate::error::{PipelineError, PipelineResult};

/// A staged upload on the local filesystem.
///
/// Owned by the background task once the request returns. Removal happens
/// exactly once: `cleanup` consumes the value.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staged file. Failures are logged, not propagated: at this
    /// point the job outcome is already decided and a leftover scratch file
    /// must not change it.
    pub async fn cleanup(self) {
        if let Err(e) = remove_scratch_file(&self.path).await {
            warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove staged file"
            );
        }
    }
}

/// Write the payload to `{dir}/{base_name}`.
///
/// This is the only pipeline step that fails the request synchronously:
/// without a staged file there is no background work to do.
pub async fn stage_upload(
    dir: impl AsRef<Path>,
    base_name: &str,
    bytes: &[u8],
) -> PipelineResult<StagedFile> {
    let path = dir.as_ref().join(base_name);

    write_scratch_file(&path, bytes)
        .await
        .map_err(|source| PipelineError::Staging {
            path: path.clone(),
            source,
        })?;

    Ok(StagedFile { path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;

    #[tokio::test]
    async fn test_stage_writes_payload() {
        let dir = TempDir::new().unwrap();

        let staged = stage_upload(dir.path(), "1-000000001-clip.mp4", b"payload")
            .await
            .unwrap();

        assert_eq!(fs::read(staged.path()).await.unwrap(), b"payload");
    }

    #[tokio::test]
    async fn test_cleanup_removes_file() {
        let dir = TempDir::new().unwrap();
        let staged = stage_upload(dir.path(), "clip.mp4", b"x").await.unwrap();
        let path = staged.path().to_path_buf();

        staged.cleanup().await;

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_stage_failure_is_classified() {
        // A directory where a file must go makes the write fail.
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("clip.mp4")).await.unwrap();

        let err = stage_upload(dir.path(), "clip.mp4", b"x").await.unwrap_err();

        assert!(matches!(err, PipelineError::Staging { .. }));
    }

    #[tokio::test]
    async fn test_cleanup_tolerates_already_removed() {
        let dir = TempDir::new().unwrap();
        let staged = stage_upload(dir.path(), "clip.mp4", b"x").await.unwrap();
        fs::remove_file(staged.path()).await.unwrap();

        // Must not panic or error out.
        staged.cleanup().await;
    }
}
