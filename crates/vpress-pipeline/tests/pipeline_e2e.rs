//! End-to-end pipeline integration test.
//!
//! Needs a real ffmpeg on PATH and STORAGE_* credentials; generates a short
//! synthetic clip, submits it, and polls the oracle until the predicted URL
//! goes live.

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use vpress_models::{PublishState, UploadPayload};
use vpress_pipeline::{PipelineConfig, StatusOracle, TranscodePipeline};
use vpress_storage::StoreClient;

/// Render a 1-second synthetic test clip with ffmpeg.
async fn generate_test_clip(path: &std::path::Path) {
    let status = tokio::process::Command::new("ffmpeg")
        .args([
            "-y",
            "-v",
            "error",
            "-f",
            "lavfi",
            "-i",
            "testsrc=duration=1:size=320x240:rate=15",
            "-f",
            "lavfi",
            "-i",
            "sine=frequency=440:duration=1",
            "-c:v",
            "libx264",
            "-c:a",
            "aac",
            "-shortest",
        ])
        .arg(path)
        .status()
        .await
        .expect("failed to run ffmpeg");
    assert!(status.success(), "test clip generation failed");
}

#[tokio::test]
#[ignore = "requires ffmpeg and storage credentials"]
async fn test_submit_then_poll_until_completed() {
    dotenvy::dotenv().ok();
    which::which("ffmpeg").expect("ffmpeg not on PATH");

    let store = Arc::new(
        StoreClient::from_env()
            .await
            .expect("Failed to create store client"),
    );

    let staging = TempDir::new().unwrap();
    let config = PipelineConfig {
        staging_dir: staging.path().to_path_buf(),
        ffmpeg_program: "ffmpeg".to_string(),
    };
    let pipeline = TranscodePipeline::new(config, Arc::clone(&store));
    let oracle = StatusOracle::new(Arc::clone(&store));

    let clip_path = staging.path().join("source.mp4");
    generate_test_clip(&clip_path).await;
    let bytes = tokio::fs::read(&clip_path).await.unwrap();
    tokio::fs::remove_file(&clip_path).await.unwrap();

    let receipt = pipeline
        .submit(UploadPayload::new(bytes, "integration test.mp4", "video/mp4"))
        .await
        .expect("submit failed");

    assert!(receipt.predicted_url.ends_with(".ogv"));

    // Immediately after submit the artifact cannot be live yet.
    let report = oracle
        .check(&receipt.plan.output_name)
        .await
        .expect("status probe failed");
    assert_eq!(report.state, PublishState::Processing);
    assert_eq!(report.video_url, None);

    // Poll until the background job publishes.
    let mut completed = None;
    for _ in 0..120 {
        let report = oracle
            .check(&receipt.plan.output_name)
            .await
            .expect("status probe failed");
        if report.state == PublishState::Completed {
            completed = Some(report);
            break;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    let report = completed.expect("conversion did not complete within 120s");
    assert_eq!(report.video_url.as_deref(), Some(receipt.predicted_url.as_str()));

    pipeline.shutdown().await;

    // No scratch files left behind.
    let mut entries = tokio::fs::read_dir(staging.path()).await.unwrap();
    assert!(entries.next_entry().await.unwrap().is_none());
}
