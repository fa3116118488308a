use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{CaptionSegment, TranscriptBundle, VideoMetadata},
    services::{
        caption_provider::{CaptionError, CaptionProvider},
        metadata_provider::MetadataProvider,
    },
};

const CHARS_PER_TOKEN: f64 = 4.0;
const TRUNCATION_MARKER: &str = "...";

static VIDEO_ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)",
        r"youtube\.com/watch\?.*v=([^&\n?#]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("VIDEO_ID_PATTERNS are valid regex patterns"))
    .collect()
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN is a valid regex pattern"));
static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]").expect("BRACKETED is a valid regex pattern"));
static PARENTHESIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(.*?\)").expect("PARENTHESIZED is a valid regex pattern"));
static SPACE_BEFORE_PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+([.,!?])").expect("SPACE_BEFORE_PUNCTUATION is a valid regex pattern")
});
static NEWLINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n+").expect("NEWLINE_RUN is a valid regex pattern"));

/// Pulls the video id out of `watch?v=`, `youtu.be/` and `embed/` URLs.
pub fn extract_video_id(reference: &str) -> AppResult<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(reference))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            AppError::InvalidReference(format!("Invalid YouTube URL format: {}", reference))
        })
}

/// Joins caption segments into one cleaned text blob.
pub fn clean_transcript(segments: &[CaptionSegment]) -> String {
    let joined = segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    clean_text(&joined)
}

/// Strips `[...]` and `(...)` annotations before punctuation cleanup, collapsing
/// whitespace on both sides of that step. Idempotent.
pub fn clean_text(text: &str) -> String {
    let text = WHITESPACE_RUN.replace_all(text, " ");
    let text = BRACKETED.replace_all(&text, "");
    let text = PARENTHESIZED.replace_all(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = SPACE_BEFORE_PUNCTUATION.replace_all(&text, "$1");
    let text = NEWLINE_RUN.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Rough token count at four characters per token.
pub fn estimate_tokens(text: &str) -> f64 {
    text.chars().count() as f64 / CHARS_PER_TOKEN
}

pub fn is_too_long(text: &str, token_limit: usize) -> bool {
    estimate_tokens(text) > token_limit as f64
}

pub fn truncate(text: &str, token_limit: usize) -> String {
    let max_chars = token_limit.saturating_mul(CHARS_PER_TOKEN as usize);
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

pub struct TranscriptService {
    captions: Arc<dyn CaptionProvider>,
    metadata: Option<Arc<dyn MetadataProvider>>,
}

impl TranscriptService {
    /// `metadata` is `None` when no YouTube API key is configured.
    pub fn new(
        captions: Arc<dyn CaptionProvider>,
        metadata: Option<Arc<dyn MetadataProvider>>,
    ) -> Self {
        Self { captions, metadata }
    }

    pub async fn get_transcript(&self, reference: &str) -> AppResult<TranscriptBundle> {
        let video_id = extract_video_id(reference)?;
        log::info!("Fetching transcript for video {}", video_id);

        let segments = self.fetch_captions(&video_id).await?;
        let text = clean_transcript(&segments);
        if text.is_empty() {
            log::warn!(
                "Video {} returned {} caption segments with no usable text",
                video_id,
                segments.len()
            );
            return Err(AppError::TranscriptUnavailable(format!(
                "No transcript text available for video {}",
                video_id
            )));
        }
        log::info!(
            "Cleaned transcript for video {}: {} segments, {} characters",
            video_id,
            segments.len(),
            text.chars().count()
        );

        let metadata = self.fetch_metadata(&video_id).await;
        Ok(TranscriptBundle::new(text, metadata))
    }

    pub async fn fetch_captions(&self, video_id: &str) -> AppResult<Vec<CaptionSegment>> {
        self.captions.fetch(video_id).await.map_err(|e| match e {
            CaptionError::Disabled(_) | CaptionError::NotFound(_) => AppError::TranscriptUnavailable(
                format!(
                    "Unable to fetch transcript for video {}. The video may not have captions or is unavailable.",
                    video_id
                ),
            ),
            CaptionError::Upstream(message) => AppError::AcquisitionFailure(message),
        })
    }

    /// Never fails: any fault yields the placeholder title and duration.
    pub async fn fetch_metadata(&self, video_id: &str) -> VideoMetadata {
        let Some(provider) = &self.metadata else {
            return VideoMetadata::fallback();
        };

        match provider.fetch(video_id).await {
            Ok(metadata) => metadata,
            Err(e) => {
                log::warn!("Metadata lookup failed for video {}: {}", video_id, e);
                VideoMetadata::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        caption_provider::MockCaptionProvider,
        metadata_provider::{MetadataError, MockMetadataProvider},
    };

    fn segments(texts: &[&str]) -> Vec<CaptionSegment> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| CaptionSegment::new(*t, i as f64, 1.0))
            .collect()
    }

    #[test]
    fn test_extract_video_id_standard_url() {
        let id = extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_extract_video_id_short_url() {
        let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_extract_video_id_embed_url() {
        let id = extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap();
        assert_eq!(id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_extract_video_id_stops_at_query_and_fragment() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL1").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=30").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ#start").unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_extract_video_id_with_v_not_first() {
        let id =
            extract_video_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_extract_video_id_invalid_url() {
        let err = extract_video_id("https://example.com/video").unwrap_err();
        assert!(matches!(err, AppError::InvalidReference(_)));
        assert!(err.to_string().contains("Invalid YouTube URL format"));
    }

    #[test]
    fn test_clean_removes_annotations() {
        assert_eq!(clean_text("[Music] Hello   world (inaudible)"), "Hello world");
    }

    #[test]
    fn test_clean_transcript_joins_segments() {
        let cleaned = clean_transcript(&segments(&["[Music]", "Hello   world", "(inaudible)", "Test  content"]));

        assert_eq!(cleaned, "Hello world Test content");
        assert!(!cleaned.contains("  "));
    }

    #[test]
    fn test_clean_fixes_space_left_before_punctuation() {
        assert_eq!(clean_text("We are done [Applause] ."), "We are done.");
        assert_eq!(clean_text("Wait , what ?"), "Wait, what?");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let inputs = [
            "[Music] Hello   world (inaudible)",
            "a [x] b (y) c",
            "  Leading\n\nand trailing  \t ",
            "nested [a [b] c] text ((deep)) end .",
            "Already clean text.",
        ];

        for input in inputs {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_estimate_tokens() {
        assert_eq!(estimate_tokens("abcd"), 1.0);
        assert_eq!(estimate_tokens("abcdef"), 1.5);
        assert_eq!(estimate_tokens(""), 0.0);
    }

    #[test]
    fn test_is_too_long() {
        let short_text = "a".repeat(1000);
        let long_text = "a".repeat(50000);

        assert!(!is_too_long(&short_text, 12000));
        assert!(is_too_long(&long_text, 12000));
    }

    #[test]
    fn test_is_too_long_is_monotonic() {
        let mut previous = false;
        for len in (47_000..49_000).step_by(250) {
            let current = is_too_long(&"a".repeat(len), 12000);
            assert!(current || !previous, "flipped back at length {len}");
            previous = current;
        }
        assert!(previous);
    }

    #[test]
    fn test_truncate_long_text() {
        let long_text = "a".repeat(100_000);
        let truncated = truncate(&long_text, 12000);

        assert!(truncated.chars().count() <= 12000 * 4 + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_leaves_short_text_unchanged() {
        let text = "a".repeat(100);
        assert_eq!(truncate(&text, 12000), text);

        let exact = "b".repeat(40);
        assert_eq!(truncate(&exact, 10), exact);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        let truncated = truncate(&text, 1);

        assert_eq!(truncated, "éééé...");
    }

    #[actix_web::test]
    async fn test_get_transcript_builds_bundle() {
        let mut captions = MockCaptionProvider::new();
        captions.expect_fetch().times(1).returning(|id| {
            assert_eq!(id, "dQw4w9WgXcQ");
            Ok(segments(&["[Music]", "Hello world", "again ."]))
        });

        let mut metadata = MockMetadataProvider::new();
        metadata.expect_fetch().returning(|_| {
            Ok(VideoMetadata {
                title: "Never Gonna".to_string(),
                duration: "0:03:33".to_string(),
            })
        });

        let service = TranscriptService::new(Arc::new(captions), Some(Arc::new(metadata)));
        let bundle = service
            .get_transcript("https://youtu.be/dQw4w9WgXcQ")
            .await
            .expect("transcript should be fetched");

        assert_eq!(bundle.text, "Hello world again.");
        assert_eq!(bundle.title, "Never Gonna");
        assert_eq!(bundle.duration, "0:03:33");
    }

    #[actix_web::test]
    async fn test_invalid_reference_skips_caption_fetch() {
        let mut captions = MockCaptionProvider::new();
        captions.expect_fetch().never();

        let service = TranscriptService::new(Arc::new(captions), None);
        let err = service.get_transcript("https://vimeo.com/123").await.unwrap_err();

        assert!(matches!(err, AppError::InvalidReference(_)));
    }

    #[actix_web::test]
    async fn test_disabled_and_missing_captions_are_unavailable() {
        for caption_error in [
            CaptionError::Disabled("id".into()),
            CaptionError::NotFound("id".into()),
        ] {
            let mut captions = MockCaptionProvider::new();
            let returned = caption_error.clone();
            captions
                .expect_fetch()
                .returning(move |_| Err(returned.clone()));

            let service = TranscriptService::new(Arc::new(captions), None);
            let err = service.fetch_captions("id").await.unwrap_err();

            assert!(matches!(err, AppError::TranscriptUnavailable(_)));
        }
    }

    #[actix_web::test]
    async fn test_captions_without_usable_text_are_unavailable() {
        for returned in [Vec::new(), segments(&["[Music]", "(applause)", "  "])] {
            let mut captions = MockCaptionProvider::new();
            captions
                .expect_fetch()
                .returning(move |_| Ok(returned.clone()));
            let mut metadata = MockMetadataProvider::new();
            metadata.expect_fetch().never();

            let service = TranscriptService::new(Arc::new(captions), Some(Arc::new(metadata)));
            let err = service
                .get_transcript("https://youtu.be/dQw4w9WgXcQ")
                .await
                .unwrap_err();

            assert!(
                matches!(err, AppError::TranscriptUnavailable(_)),
                "got {err:?}"
            );
        }
    }

    #[actix_web::test]
    async fn test_upstream_caption_fault_is_acquisition_failure() {
        let mut captions = MockCaptionProvider::new();
        captions
            .expect_fetch()
            .returning(|_| Err(CaptionError::Upstream("connection reset".into())));

        let service = TranscriptService::new(Arc::new(captions), None);
        let err = service.fetch_captions("id").await.unwrap_err();

        match err {
            AppError::AcquisitionFailure(message) => assert_eq!(message, "connection reset"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[actix_web::test]
    async fn test_metadata_without_provider_uses_fallback() {
        let service = TranscriptService::new(Arc::new(MockCaptionProvider::new()), None);

        assert_eq!(service.fetch_metadata("id").await, VideoMetadata::fallback());
    }

    #[actix_web::test]
    async fn test_metadata_fault_is_swallowed() {
        let mut metadata = MockMetadataProvider::new();
        metadata
            .expect_fetch()
            .returning(|id| Err(MetadataError::NotFound(id.to_string())));

        let service =
            TranscriptService::new(Arc::new(MockCaptionProvider::new()), Some(Arc::new(metadata)));

        assert_eq!(service.fetch_metadata("id").await, VideoMetadata::fallback());
    }
}
