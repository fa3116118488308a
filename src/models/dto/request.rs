use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_VIDEO_TITLE: &str = "Video Learning Materials";

fn default_video_title() -> String {
    DEFAULT_VIDEO_TITLE.to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VideoRequestDto {
    #[validate(url(message = "youtube_url must be a valid URL"))]
    pub youtube_url: String,
}

/// Transcript length bounds are enforced by the pipeline, not here, so the
/// error names the violated bound.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TranscriptRequestDto {
    pub transcript: String,

    #[serde(default = "default_video_title")]
    #[validate(length(min = 1, max = 200))]
    pub video_title: String,
}
