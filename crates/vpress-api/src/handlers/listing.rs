//! Published-artifact listing handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use vpress_models::{PUBLISHED_EXTENSION, VIDEOS_PREFIX};

use crate::error::ApiResult;
use crate::state::AppState;

/// Listing response.
#[derive(Serialize)]
pub struct VideoListResponse {
    pub videos: Vec<String>,
}

/// List public URLs of all published artifacts. A single filtered
/// enumeration of the `videos/` prefix; no pagination, no caching.
pub async fn list_published_videos(
    State(state): State<AppState>,
) -> ApiResult<Json<VideoListResponse>> {
    let objects = state
        .store
        .list_objects(&format!("{}/", VIDEOS_PREFIX))
        .await?;

    let suffix = format!(".{}", PUBLISHED_EXTENSION);
    let videos = objects
        .into_iter()
        .filter(|o| o.key.ends_with(&suffix))
        .map(|o| state.store.public_url(&o.key))
        .collect();

    Ok(Json(VideoListResponse { videos }))
}
