use serde::{Deserialize, Serialize};

pub const FALLBACK_VIDEO_TITLE: &str = "YouTube Video";
pub const FALLBACK_DURATION: &str = "Unknown";

/// One caption line as returned by a caption provider.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CaptionSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl CaptionSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Display-ready title and duration of a video.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoMetadata {
    pub title: String,
    pub duration: String,
}

impl VideoMetadata {
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_VIDEO_TITLE.to_string(),
            duration: FALLBACK_DURATION.to_string(),
        }
    }
}

/// Cleaned transcript text plus the metadata it was fetched with.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranscriptBundle {
    pub text: String,
    pub title: String,
    pub duration: String,
}

impl TranscriptBundle {
    pub fn new(text: String, metadata: VideoMetadata) -> Self {
        Self {
            text,
            title: metadata.title,
            duration: metadata.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_metadata_uses_placeholder_values() {
        let metadata = VideoMetadata::fallback();

        assert_eq!(metadata.title, "YouTube Video");
        assert_eq!(metadata.duration, "Unknown");
    }

    #[test]
    fn bundle_takes_title_and_duration_from_metadata() {
        let metadata = VideoMetadata {
            title: "Rust Ownership".to_string(),
            duration: "0:12:04".to_string(),
        };

        let bundle = TranscriptBundle::new("hello world".to_string(), metadata);

        assert_eq!(bundle.text, "hello world");
        assert_eq!(bundle.title, "Rust Ownership");
        assert_eq!(bundle.duration, "0:12:04");
    }
}
