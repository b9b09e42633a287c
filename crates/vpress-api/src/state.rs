//! Application state.

use std::path::PathBuf;
use std::sync::Arc;

use vpress_pipeline::{PipelineConfig, StatusOracle, TranscodePipeline};
use vpress_storage::StoreClient;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<StoreClient>,
    pub pipeline: Arc<TranscodePipeline>,
    pub oracle: StatusOracle,
    pub staging_dir: PathBuf,
}

impl AppState {
    /// Create new application state.
    ///
    /// Fails fast on missing storage configuration and bootstraps the
    /// staging directory so the first upload never races directory
    /// creation.
    pub async fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let store = Arc::new(StoreClient::from_env().await?);

        let pipeline_config = PipelineConfig::from_env();
        tokio::fs::create_dir_all(&pipeline_config.staging_dir).await?;
        let staging_dir = pipeline_config.staging_dir.clone();

        let pipeline = Arc::new(TranscodePipeline::new(pipeline_config, Arc::clone(&store)));
        let oracle = StatusOracle::new(Arc::clone(&store));

        Ok(Self {
            config,
            store,
            pipeline,
            oracle,
            staging_dir,
        })
    }
}
