use std::sync::Arc;

use crate::{
    config::ShapeRules,
    constants::learning_prompt::{build_system_prompt, build_user_prompt},
    errors::AppResult,
    models::domain::LearningContent,
    services::{
        completion_provider::{CompletionProvider, GenerationParams},
        normalizer::normalize_completion,
    },
};

/// Requests one completion for a transcript and normalizes it.
pub struct StudyMaterialService {
    provider: Arc<dyn CompletionProvider>,
    params: GenerationParams,
    rules: ShapeRules,
}

impl StudyMaterialService {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        params: GenerationParams,
        rules: ShapeRules,
    ) -> Self {
        Self {
            provider,
            params,
            rules,
        }
    }

    pub async fn generate(&self, transcript: &str, video_title: &str) -> AppResult<LearningContent> {
        let system_prompt = build_system_prompt(&self.rules);
        let user_prompt = build_user_prompt(transcript, video_title, &self.rules);

        let completion = self
            .provider
            .complete(&system_prompt, &user_prompt, &self.params)
            .await?;
        log::info!(
            "Received completion for '{}' ({} characters)",
            video_title,
            completion.chars().count()
        );

        normalize_completion(&completion, &self.rules)
    }
}
