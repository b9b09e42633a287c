//! Validated upload payload and gatekeeper constants.

/// MIME types the upload gatekeeper accepts.
pub const ACCEPTED_VIDEO_TYPES: &[&str] = &["video/mp4", "video/x-mov", "video/quicktime"];

/// Fixed byte ceiling for a single upload (100 MiB).
pub const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Whether a declared content type is on the accept list.
pub fn is_accepted_content_type(content_type: &str) -> bool {
    ACCEPTED_VIDEO_TYPES.contains(&content_type)
}

/// A validated inbound upload.
///
/// Owned exclusively by the request that received it and handed to the
/// pipeline once; discarded after staging.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// Filename as declared by the client (unsanitized).
    pub original_filename: String,
    /// Content type as declared by the client.
    pub content_type: String,
    /// Byte length of `bytes`.
    pub size: usize,
}

impl UploadPayload {
    pub fn new(
        bytes: Vec<u8>,
        original_filename: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        let size = bytes.len();
        Self {
            bytes,
            original_filename: original_filename.into(),
            content_type: content_type.into(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_content_types() {
        assert!(is_accepted_content_type("video/mp4"));
        assert!(is_accepted_content_type("video/quicktime"));
        assert!(is_accepted_content_type("video/x-mov"));

        assert!(!is_accepted_content_type("video/webm"));
        assert!(!is_accepted_content_type("image/png"));
        assert!(!is_accepted_content_type("VIDEO/MP4"));
        assert!(!is_accepted_content_type(""));
    }

    #[test]
    fn test_payload_records_size() {
        let payload = UploadPayload::new(vec![0u8; 1234], "clip.mp4", "video/mp4");
        assert_eq!(payload.size, 1234);
        assert_eq!(payload.original_filename, "clip.mp4");
    }
}
