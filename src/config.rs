use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

/// Counts the generated learning materials must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeRules {
    pub summary_paragraphs: usize,
    pub key_points: usize,
    pub min_notes: usize,
    pub target_notes: usize,
    pub quiz_questions: usize,
    pub quiz_options: usize,
}

impl Default for ShapeRules {
    fn default() -> Self {
        Self {
            summary_paragraphs: 3,
            key_points: 5,
            min_notes: 5,
            target_notes: 7,
            quiz_questions: 10,
            quiz_options: 4,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub llm_api_key: SecretString,
    pub llm_api_base: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    pub youtube_api_key: Option<SecretString>,
    pub max_transcript_tokens: usize,
    pub truncate_long_transcripts: bool,
    pub shape_rules: ShapeRules,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            llm_api_key: SecretString::from(env::var("LLM_API_KEY").unwrap_or_default()),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            llm_model: env::var("LLM_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
            llm_temperature: env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            llm_max_tokens: env::var("LLM_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(4000),
            youtube_api_key: env::var("YOUTUBE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            max_transcript_tokens: env::var("MAX_TRANSCRIPT_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(12000),
            truncate_long_transcripts: env::var("TRUNCATE_LONG_TRANSCRIPTS")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
            shape_rules: ShapeRules::default(),
        }
    }

    /// Checks settings the server cannot run without.
    /// Missing credentials only warn: the transcript endpoint still validates input without them.
    pub fn validate(&self) -> AppResult<()> {
        if self.llm_api_key.expose_secret().is_empty() {
            log::warn!("LLM_API_KEY is not set; completion requests will be rejected by the provider");
        }
        if self.youtube_api_key.is_none() {
            log::warn!("YOUTUBE_API_KEY is not set; video titles and durations will use fallbacks");
        }

        if !(0.0..=2.0).contains(&self.llm_temperature) {
            return Err(AppError::Config(format!(
                "LLM_TEMPERATURE must be between 0 and 2, got {}",
                self.llm_temperature
            )));
        }
        if self.llm_max_tokens == 0 {
            return Err(AppError::Config("LLM_MAX_TOKENS must be greater than 0".to_string()));
        }
        if self.max_transcript_tokens == 0 {
            return Err(AppError::Config(
                "MAX_TRANSCRIPT_TOKENS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            llm_api_key: SecretString::from("test_llm_key".to_string()),
            llm_api_base: "http://localhost:9999/v1".to_string(),
            llm_model: "test-model".to_string(),
            llm_temperature: 0.7,
            llm_max_tokens: 4000,
            youtube_api_key: None,
            max_transcript_tokens: 12000,
            truncate_long_transcripts: false,
            shape_rules: ShapeRules::default(),
        }
    }
}
