//! Upload submission and the detached encode→publish→cleanup job.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, warn};

use vpress_media::scratch::remove_scratch_file;
use vpress_models::{format_bytes, KeyPlan, UploadPayload, PUBLISHED_CONTENT_TYPE};
use vpress_storage::{ObjectVisibility, StoreClient};

use crate::config::PipelineConfig;
use crate::error::PipelineResult;
use crate::spawner::JobSpawner;
use crate::staging::{stage_upload, StagedFile};
use crate::transcode::Transcoder;

/// What the caller gets back, synchronously, from a submit.
#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    /// Public URL the published artifact will eventually have. Stable from
    /// this moment on, whether or not the background job ever succeeds.
    pub predicted_url: String,
    /// The keys fixed for this upload.
    pub plan: KeyPlan,
}

/// The transcode-and-publish pipeline.
pub struct TranscodePipeline {
    config: PipelineConfig,
    store: Arc<StoreClient>,
    transcoder: Transcoder,
    spawner: JobSpawner,
}

impl TranscodePipeline {
    pub fn new(config: PipelineConfig, store: Arc<StoreClient>) -> Self {
        let transcoder = Transcoder::new(config.ffmpeg_program.clone());
        Self {
            config,
            store,
            transcoder,
            spawner: JobSpawner::new(),
        }
    }

    /// Accept an upload: fix the keys, stage the bytes, hand back the
    /// predicted URL and detach the conversion job.
    ///
    /// Only staging failures surface here — they abort the request before a
    /// response exists. Everything after the return is fire-and-forget: the
    /// job result never reaches the submitting caller.
    pub async fn submit(&self, payload: UploadPayload) -> PipelineResult<SubmitReceipt> {
        // Keys and URL are fixed before any encoder or store I/O.
        let plan = KeyPlan::generate(&payload.original_filename);
        let predicted_url = self.store.public_url(&plan.output_key);

        let staged = stage_upload(&self.config.staging_dir, &plan.base_name, &payload.bytes).await?;

        info!(
            input_key = %plan.input_key,
            output_key = %plan.output_key,
            size = %format_bytes(payload.size as u64),
            original = %payload.original_filename,
            "upload staged, detaching transcode job"
        );

        let store = Arc::clone(&self.store);
        let transcoder = self.transcoder.clone();
        let output_path = self.config.staging_dir.join(&plan.output_name);
        let job_plan = plan.clone();
        self.spawner.spawn(async move {
            run_job(store, transcoder, job_plan, payload, staged, output_path).await;
        });

        Ok(SubmitReceipt { predicted_url, plan })
    }

    /// Number of conversions currently in flight.
    pub fn active_jobs(&self) -> usize {
        self.spawner.active()
    }

    /// Wait for in-flight conversions to drain.
    pub async fn shutdown(&self) {
        self.spawner.shutdown().await;
    }
}

/// The detached unit of work. Never returns anything to the submitter;
/// outcomes are logged with enough context to diagnose after the fact.
async fn run_job(
    store: Arc<StoreClient>,
    transcoder: Transcoder,
    plan: KeyPlan,
    payload: UploadPayload,
    staged: StagedFile,
    output_path: PathBuf,
) {
    let result = convert_and_publish(
        &store,
        &transcoder,
        &plan,
        &payload.content_type,
        &staged,
        &output_path,
    )
    .await;

    // Scoped cleanup: both staged files go away on every exit path.
    staged.cleanup().await;
    if let Err(e) = remove_scratch_file(&output_path).await {
        warn!(path = %output_path.display(), error = %e, "failed to remove encoder output");
    }

    match result {
        Ok(()) => info!(
            output_key = %plan.output_key,
            original = %payload.original_filename,
            "artifact published"
        ),
        Err(e) => error!(
            error = %e,
            input_key = %plan.input_key,
            output_key = %plan.output_key,
            original = %payload.original_filename,
            "background conversion failed; predicted URL will not resolve"
        ),
    }
}

async fn convert_and_publish(
    store: &StoreClient,
    transcoder: &Transcoder,
    plan: &KeyPlan,
    content_type: &str,
    staged: &StagedFile,
    output_path: &Path,
) -> PipelineResult<()> {
    // At-least-once backup of the original, private. Best effort: a failed
    // backup must not stop the conversion.
    if let Err(e) = store
        .upload_file(
            staged.path(),
            &plan.input_key,
            content_type,
            ObjectVisibility::Private,
        )
        .await
    {
        warn!(key = %plan.input_key, error = %e, "original backup upload failed");
    }

    transcoder.transcode(staged.path(), output_path).await?;

    // The public object is created only after the encode fully succeeded:
    // callers may already be polling the predicted URL.
    store
        .upload_file(
            output_path,
            &plan.output_key,
            PUBLISHED_CONTENT_TYPE,
            ObjectVisibility::Public,
        )
        .await?;

    Ok(())
}
