//! Conversion-status handler.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

/// Status response. `videoUrl` is null while (or forever after, if the
/// conversion failed) the artifact is not live.
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
}

/// Report whether the predicted artifact for `name` is live.
pub async fn get_conversion_status(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<StatusResponse>> {
    let report = state.oracle.check(&name).await?;

    Ok(Json(StatusResponse {
        status: report.state.as_str().to_string(),
        video_url: report.video_url,
    }))
}
