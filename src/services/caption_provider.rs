use async_trait::async_trait;
use thiserror::Error;
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::errors::CouldNotRetrieveTranscriptReason;

use crate::models::domain::CaptionSegment;

const CAPTION_LANGUAGES: &[&str] = &["en"];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaptionError {
    #[error("captions are disabled for video {0}")]
    Disabled(String),

    #[error("no captions found for video {0}")]
    NotFound(String),

    #[error("{0}")]
    Upstream(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    async fn fetch(&self, video_id: &str) -> Result<Vec<CaptionSegment>, CaptionError>;
}

/// Fetches caption tracks straight from YouTube's watch page.
pub struct YoutubeCaptionProvider {
    languages: Vec<String>,
}

impl YoutubeCaptionProvider {
    pub fn new() -> Self {
        Self {
            languages: CAPTION_LANGUAGES.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl Default for YoutubeCaptionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptionProvider for YoutubeCaptionProvider {
    async fn fetch(&self, video_id: &str) -> Result<Vec<CaptionSegment>, CaptionError> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| CaptionError::Upstream(e.to_string()))?;
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        match api.fetch_transcript(video_id, &languages, false).await {
            Ok(transcript) => {
                log::debug!(
                    "Fetched {} caption snippets for video {}",
                    transcript.snippets.len(),
                    video_id
                );
                Ok(transcript
                    .snippets
                    .into_iter()
                    .map(|s| CaptionSegment::new(s.text, s.start, s.duration))
                    .collect())
            }
            Err(e) => match &e.reason {
                Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled) => {
                    Err(CaptionError::Disabled(video_id.to_string()))
                }
                Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }) => {
                    Err(CaptionError::NotFound(video_id.to_string()))
                }
                _ => Err(CaptionError::Upstream(e.to_string())),
            },
        }
    }
}
