//! Status oracle.
//!
//! Answers "is the predicted artifact live?" with a single existence probe
//! against the durable store. There is no job ledger and no expiry: a job
//! that failed permanently is indistinguishable from one still converting.

use std::sync::Arc;

use vpress_models::{PublishState, VIDEOS_PREFIX};
use vpress_storage::{StorageResult, StoreClient};

/// Answer from the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub state: PublishState,
    /// Public URL of the artifact; present only once it exists.
    pub video_url: Option<String>,
}

/// Stateless read against the publish pipeline's side effect.
#[derive(Clone)]
pub struct StatusOracle {
    store: Arc<StoreClient>,
}

impl StatusOracle {
    pub fn new(store: Arc<StoreClient>) -> Self {
        Self { store }
    }

    /// Probe the conventional published key for a caller-supplied
    /// reference (a bare object name, a key, or a full URL).
    pub async fn check(&self, reference: &str) -> StorageResult<StatusReport> {
        let name = normalize_reference(reference);
        let key = format!("{}/{}", VIDEOS_PREFIX, name);

        if self.store.exists(&key).await? {
            Ok(StatusReport {
                state: PublishState::Completed,
                video_url: Some(self.store.public_url(&key)),
            })
        } else {
            Ok(StatusReport {
                state: PublishState::Processing,
                video_url: None,
            })
        }
    }
}

/// Strip any path prefix so `videos/x.ogv`, `/bucket/videos/x.ogv` and a
/// full public URL all resolve to the same object name.
fn normalize_reference(reference: &str) -> &str {
    reference
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_name() {
        assert_eq!(normalize_reference("clip.ogv"), "clip.ogv");
    }

    #[test]
    fn test_normalize_strips_key_prefix() {
        assert_eq!(normalize_reference("videos/clip.ogv"), "clip.ogv");
    }

    #[test]
    fn test_normalize_strips_full_url() {
        assert_eq!(
            normalize_reference("https://cdn.example.com/media/videos/clip.ogv"),
            "clip.ogv"
        );
    }

    #[test]
    fn test_normalize_strips_backslashes() {
        assert_eq!(normalize_reference("videos\\clip.ogv"), "clip.ogv");
    }
}
