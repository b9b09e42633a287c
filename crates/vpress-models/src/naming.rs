//! Storage-key naming and publish-URL prediction.
//!
//! The key layout doubles as the persisted state of the whole system: the
//! status oracle re-derives the same `videos/` key the predictor handed out
//! at upload time, so the convention here must never drift.
//!
//! Layout:
//! - `uploads/<millis>-<nonce>-<sanitized-name>` — private originals
//! - `videos/<millis>-<nonce>-<sanitized-stem>.ogv` — public artifacts

use chrono::{DateTime, Utc};
use rand::Rng;

/// Key prefix for private, as-uploaded originals.
pub const UPLOADS_PREFIX: &str = "uploads";

/// Key prefix for public, transcoded artifacts.
pub const VIDEOS_PREFIX: &str = "videos";

/// Container extension of every published artifact (Ogg Theora/Vorbis).
pub const PUBLISHED_EXTENSION: &str = "ogv";

/// Content type published artifacts are stored with.
pub const PUBLISHED_CONTENT_TYPE: &str = "video/ogg";

/// Normalize a client-supplied filename into a storage-safe base segment.
///
/// Whitespace runs collapse to `_`; everything outside `[A-Za-z0-9._-]` is
/// stripped. An input that sanitizes to nothing falls back to `upload` so
/// generated keys never end in a bare separator.
pub fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;

        if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            out.push(c);
        }
    }

    if out.is_empty() {
        out.push_str("upload");
    }
    out
}

/// The full set of storage keys for one upload.
///
/// Computed exactly once, before any encoder or store I/O, so the
/// caller-visible URL is available synchronously and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPlan {
    /// Base name shared by both keys: `<millis>-<nonce>-<sanitized-name>`,
    /// original extension preserved.
    pub base_name: String,
    /// File name of the published object, no prefix: `<stem>.ogv`.
    pub output_name: String,
    /// Private key for the as-uploaded original.
    pub input_key: String,
    /// Public key the published artifact will occupy.
    pub output_key: String,
}

impl KeyPlan {
    /// Derive the keys for an upload. Pure: same inputs, same keys.
    ///
    /// `nonce` disambiguates uploads landing in the same millisecond and is
    /// rendered as nine digits to keep the base-name shape fixed.
    pub fn new(original_filename: &str, now: DateTime<Utc>, nonce: u32) -> Self {
        let clean = sanitize_file_name(original_filename);
        let base_name = format!("{}-{:09}-{}", now.timestamp_millis(), nonce, clean);

        // Replace the last extension, if any, with the published one.
        let stem = match base_name.rsplit_once('.') {
            Some((stem, _ext)) => stem,
            None => base_name.as_str(),
        };
        let output_name = format!("{}.{}", stem, PUBLISHED_EXTENSION);

        Self {
            input_key: format!("{}/{}", UPLOADS_PREFIX, base_name),
            output_key: format!("{}/{}", VIDEOS_PREFIX, output_name),
            base_name,
            output_name,
        }
    }

    /// Derive keys for an upload arriving now, with a random nonce.
    pub fn generate(original_filename: &str) -> Self {
        let nonce = rand::thread_rng().gen_range(0..1_000_000_000);
        Self::new(original_filename, Utc::now(), nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_sanitize_replaces_whitespace_runs() {
        assert_eq!(sanitize_file_name("my video.mp4"), "my_video.mp4");
        assert_eq!(sanitize_file_name("a  \t b.mov"), "a_b.mov");
        assert_eq!(sanitize_file_name("tab\there"), "tab_here");
    }

    #[test]
    fn test_sanitize_strips_unsafe_characters() {
        assert_eq!(sanitize_file_name("clip(1)!.mp4"), "clip1.mp4");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "....etcpasswd");
        assert_eq!(sanitize_file_name("a\\b/c.mp4"), "abc.mp4");
        assert_eq!(sanitize_file_name("vidéo café.mp4"), "vido_caf.mp4");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_file_name(""), "upload");
        assert_eq!(sanitize_file_name("???"), "upload");
    }

    #[test]
    fn test_sanitized_output_is_storage_safe() {
        for input in ["my video.mp4", "../../x", "a|b&c;.mov", "  ", "ünïcödé"] {
            let clean = sanitize_file_name(input);
            assert!(
                clean
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')),
                "unsafe char survived in {:?}",
                clean
            );
        }
    }

    #[test]
    fn test_key_plan_shape() {
        let plan = KeyPlan::new("my video.mp4", at(1_700_000_000_000), 42);

        assert_eq!(plan.base_name, "1700000000000-000000042-my_video.mp4");
        assert_eq!(plan.input_key, "uploads/1700000000000-000000042-my_video.mp4");
        assert_eq!(plan.output_key, "videos/1700000000000-000000042-my_video.ogv");
        assert_eq!(plan.output_name, "1700000000000-000000042-my_video.ogv");
    }

    #[test]
    fn test_output_extension_replaced_regardless_of_input() {
        for name in ["a.mp4", "b.mov", "c.MOV", "d.webm"] {
            let plan = KeyPlan::new(name, at(1), 0);
            assert!(plan.output_key.ends_with(".ogv"), "got {}", plan.output_key);
        }
    }

    #[test]
    fn test_extensionless_input_still_gets_published_extension() {
        let plan = KeyPlan::new("rawfootage", at(1), 7);
        assert_eq!(plan.output_name, "1-000000007-rawfootage.ogv");
    }

    #[test]
    fn test_only_last_extension_is_replaced() {
        let plan = KeyPlan::new("archive.tar.gz", at(1), 0);
        assert!(plan.output_name.ends_with("archive.tar.ogv"));
    }

    #[test]
    fn test_same_millisecond_uploads_get_distinct_keys() {
        let now = at(1_700_000_000_000);
        let a = KeyPlan::new("clip.mp4", now, 1);
        let b = KeyPlan::new("clip.mp4", now, 2);

        assert_ne!(a.input_key, b.input_key);
        assert_ne!(a.output_key, b.output_key);
    }

    #[test]
    fn test_generate_produces_distinct_plans() {
        let a = KeyPlan::generate("clip.mp4");
        let b = KeyPlan::generate("clip.mp4");
        // Nonce space is large enough that a collision here means a bug.
        assert_ne!(a.output_key, b.output_key);
    }
}
