use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl From<&Config> for GenerationParams {
    fn from(config: &Config) -> Self {
        Self {
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
            max_output_tokens: config.llm_max_tokens,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the raw text of a single chat completion.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> AppResult<String>;
}

/// Chat-completion client for any OpenAI-compatible endpoint (Groq by default).
pub struct OpenAiCompletionProvider {
    client: Client<OpenAIConfig>,
}

impl OpenAiCompletionProvider {
    pub fn new(api_key: &SecretString, api_base: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base);

        Self {
            client: Client::with_config(config),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> AppResult<String> {
        let request = build_chat_request(system_prompt, user_prompt, params);

        log::info!(
            "Requesting completion from model {} (max_tokens={})",
            params.model,
            params.max_output_tokens
        );
        let response: Value = self.client.chat().create_byot(request).await?;

        extract_message_content(&response)
    }
}

fn build_chat_request(system_prompt: &str, user_prompt: &str, params: &GenerationParams) -> Value {
    json!({
        "model": params.model,
        "messages": [
            { "role": "system", "content": system_prompt },
            { "role": "user", "content": user_prompt }
        ],
        "temperature": params.temperature,
        "max_tokens": params.max_output_tokens
    })
}

fn extract_message_content(response: &Value) -> AppResult<String> {
    response
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::ProviderFailure("completion response contained no message content".to_string())
        })
}
