use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        caption_provider::{CaptionProvider, YoutubeCaptionProvider},
        completion_provider::{CompletionProvider, GenerationParams, OpenAiCompletionProvider},
        learning_service::LearningService,
        metadata_provider::{MetadataProvider, YoutubeDataApiProvider},
        study_material_service::StudyMaterialService,
        transcript_service::TranscriptService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub learning_service: Arc<LearningService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let captions: Arc<dyn CaptionProvider> = Arc::new(YoutubeCaptionProvider::new());
        let metadata = config
            .youtube_api_key
            .clone()
            .map(|key| Arc::new(YoutubeDataApiProvider::new(key)) as Arc<dyn MetadataProvider>);
        let completions: Arc<dyn CompletionProvider> = Arc::new(OpenAiCompletionProvider::new(
            &config.llm_api_key,
            &config.llm_api_base,
        ));

        Ok(Self::with_providers(config, captions, metadata, completions))
    }

    /// Builds the state around caller-supplied providers.
    pub fn with_providers(
        config: Config,
        captions: Arc<dyn CaptionProvider>,
        metadata: Option<Arc<dyn MetadataProvider>>,
        completions: Arc<dyn CompletionProvider>,
    ) -> Self {
        let transcripts = TranscriptService::new(captions, metadata);
        let materials = StudyMaterialService::new(
            completions,
            GenerationParams::from(&config),
            config.shape_rules,
        );
        let learning_service = Arc::new(LearningService::new(
            transcripts,
            materials,
            config.max_transcript_tokens,
            config.truncate_long_transcripts,
        ));

        Self {
            learning_service,
            config: Arc::new(config),
        }
    }
}
