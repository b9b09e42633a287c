//! Scratch-file helpers for encoder input/output staging.
//!
//! These return plain `io::Result` so callers can classify failures into
//! their own error kinds (a staging write failure aborts a request; a
//! cleanup failure is only logged).

use std::io;
use std::path::Path;
use tokio::fs;

/// Write a byte buffer to a scratch path, creating parent directories.
pub async fn write_scratch_file(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    fs::write(path, bytes).await
}

/// Remove a scratch file. Missing files are not an error: cleanup paths can
/// race with an encoder that never produced output.
pub async fn remove_scratch_file(path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();

    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("staging").join("clip.mp4");

        write_scratch_file(&path, b"content").await.unwrap();

        assert_eq!(fs::read(&path).await.unwrap(), b"content");
    }

    #[tokio::test]
    async fn test_remove_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clip.mp4");
        fs::write(&path, b"x").await.unwrap();

        remove_scratch_file(&path).await.unwrap();

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_remove_missing_file_is_ok() {
        let dir = TempDir::new().unwrap();
        remove_scratch_file(dir.path().join("never-existed.ogv"))
            .await
            .unwrap();
    }
}
