use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::models::domain::VideoMetadata;

const YOUTUBE_VIDEOS_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/videos";

static ISO8601_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$")
        .expect("ISO8601_DURATION is a valid regex pattern")
});

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("metadata request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("video {0} not found")]
    NotFound(String),

    #[error("unrecognised duration '{0}'")]
    InvalidDuration(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn fetch(&self, video_id: &str) -> Result<VideoMetadata, MetadataError>;
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    snippet: VideoSnippet,
    content_details: VideoContentDetails,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    title: String,
}

#[derive(Debug, Deserialize)]
struct VideoContentDetails {
    duration: String,
}

/// Looks up title and duration through the YouTube Data API v3.
pub struct YoutubeDataApiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    endpoint: String,
}

impl YoutubeDataApiProvider {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint: YOUTUBE_VIDEOS_ENDPOINT.to_string(),
        }
    }
}

#[async_trait]
impl MetadataProvider for YoutubeDataApiProvider {
    async fn fetch(&self, video_id: &str) -> Result<VideoMetadata, MetadataError> {
        let response: VideoListResponse = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("part", "snippet,contentDetails"),
                ("id", video_id),
                ("key", self.api_key.expose_secret()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        metadata_from_response(video_id, response)
    }
}

fn metadata_from_response(
    video_id: &str,
    response: VideoListResponse,
) -> Result<VideoMetadata, MetadataError> {
    let item = response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| MetadataError::NotFound(video_id.to_string()))?;

    let duration = format_iso8601_duration(&item.content_details.duration)
        .ok_or(MetadataError::InvalidDuration(item.content_details.duration))?;

    Ok(VideoMetadata {
        title: item.snippet.title,
        duration,
    })
}

/// Renders an ISO-8601 duration (`PT1H2M3S`) as `H:MM:SS`, prefixed with a
/// day count when it spans more than a day (`1 day, 2:03:04`).
pub fn format_iso8601_duration(iso: &str) -> Option<String> {
    let caps = ISO8601_DURATION.captures(iso.trim())?;
    let part = |i: usize| -> Option<u64> {
        caps.get(i)
            .map_or(Some(0), |m| m.as_str().parse::<u64>().ok())
    };

    let total_seconds = [(1, 604_800u64), (2, 86_400), (3, 3_600), (4, 60), (5, 1)]
        .iter()
        .try_fold(0u64, |acc, &(group, unit)| {
            part(group)?.checked_mul(unit)?.checked_add(acc)
        })?;

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    let clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);

    Some(match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    })
}
