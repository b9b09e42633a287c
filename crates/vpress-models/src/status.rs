//! Publish state as observed through the durable store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a published artifact, reconstructed on demand from an existence
/// probe. There is no third value: a failed job keeps reporting
/// `Processing` because nothing records the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishState {
    /// The predicted object exists in the durable store.
    Completed,
    /// The predicted object does not exist (yet, or ever).
    Processing,
}

impl PublishState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishState::Completed => "completed",
            PublishState::Processing => "processing",
        }
    }
}

impl fmt::Display for PublishState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Format a byte count for logs and listings.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_state_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PublishState::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(PublishState::Processing.to_string(), "processing");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
    }
}
