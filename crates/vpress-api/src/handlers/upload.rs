//! Upload handler and gatekeeper.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use vpress_models::{is_accepted_content_type, UploadPayload, MAX_UPLOAD_BYTES};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Upload response: the predicted URL is handed out before any conversion
/// work has started.
#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
}

/// Accept a video upload and detach its conversion.
///
/// Everything up to (and including) staging fails the request; the
/// conversion itself is fire-and-forget and its outcome is only observable
/// through the status endpoint.
pub async fn upload_video(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<UploadResponse>)> {
    let payload = extract_video_field(&mut multipart).await?;
    validate_payload(&payload)?;

    info!(
        original = %payload.original_filename,
        content_type = %payload.content_type,
        size = payload.size,
        "upload accepted"
    );

    let receipt = state.pipeline.submit(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Video uploaded. Conversion started in the background.".to_string(),
            video_url: receipt.predicted_url,
        }),
    ))
}

/// Pull the `video` field out of the multipart body.
async fn extract_video_field(multipart: &mut Multipart) -> ApiResult<UploadPayload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("video") {
            continue;
        }

        let original_filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .ok_or_else(|| ApiError::validation("Missing content type on video field"))?
            .to_string();

        // Reject on the declared type before buffering the body.
        if !is_accepted_content_type(&content_type) {
            return Err(ApiError::validation(
                "Invalid file type. Only MP4 and MOV are allowed.",
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read video field: {}", e)))?;

        return Ok(UploadPayload::new(
            bytes.to_vec(),
            original_filename,
            content_type,
        ));
    }

    Err(ApiError::bad_request("No video file uploaded."))
}

fn validate_payload(payload: &UploadPayload) -> ApiResult<()> {
    if payload.size == 0 {
        return Err(ApiError::validation("Uploaded video is empty."));
    }
    if payload.size > MAX_UPLOAD_BYTES {
        return Err(ApiError::validation(format!(
            "Video exceeds the {} byte limit.",
            MAX_UPLOAD_BYTES
        )));
    }
    Ok(())
}
