use crate::{
    errors::{AppError, AppResult, InputBound},
    models::domain::LearningMaterials,
    services::{
        study_material_service::StudyMaterialService,
        transcript_service::{estimate_tokens, is_too_long, truncate, TranscriptService},
    },
};

pub const MIN_TRANSCRIPT_CHARS: usize = 100;
pub const MAX_TRANSCRIPT_CHARS: usize = 50_000;
pub const RAW_TRANSCRIPT_DURATION: &str = "N/A";

/// Entry points for both request kinds. Holds no per-request state.
pub struct LearningService {
    transcripts: TranscriptService,
    materials: StudyMaterialService,
    max_transcript_tokens: usize,
    truncate_long_transcripts: bool,
}

impl LearningService {
    pub fn new(
        transcripts: TranscriptService,
        materials: StudyMaterialService,
        max_transcript_tokens: usize,
        truncate_long_transcripts: bool,
    ) -> Self {
        Self {
            transcripts,
            materials,
            max_transcript_tokens,
            truncate_long_transcripts,
        }
    }

    pub async fn process_video_reference(&self, reference: &str) -> AppResult<LearningMaterials> {
        let bundle = self.transcripts.get_transcript(reference).await?;
        let text = self.fit_to_budget(bundle.text)?;

        let content = self.materials.generate(&text, &bundle.title).await?;
        Ok(LearningMaterials::from_content(
            content,
            bundle.title,
            bundle.duration,
        ))
    }

    pub async fn process_raw_transcript(
        &self,
        transcript: &str,
        video_title: &str,
    ) -> AppResult<LearningMaterials> {
        check_transcript_length(transcript)?;
        let text = self.fit_to_budget(transcript.to_string())?;

        let content = self.materials.generate(&text, video_title).await?;
        Ok(LearningMaterials::from_content(
            content,
            video_title,
            RAW_TRANSCRIPT_DURATION,
        ))
    }

    fn fit_to_budget(&self, text: String) -> AppResult<String> {
        if !is_too_long(&text, self.max_transcript_tokens) {
            return Ok(text);
        }

        if self.truncate_long_transcripts {
            log::warn!(
                "Transcript of ~{:.0} tokens truncated to {} tokens",
                estimate_tokens(&text),
                self.max_transcript_tokens
            );
            return Ok(truncate(&text, self.max_transcript_tokens));
        }

        Err(AppError::ContentTooLong(format!(
            "Transcript is ~{:.0} tokens, above the limit of {}. Please try a video under 60 minutes.",
            estimate_tokens(&text),
            self.max_transcript_tokens
        )))
    }
}

pub fn check_transcript_length(transcript: &str) -> AppResult<()> {
    let length = transcript.chars().count();

    if length < MIN_TRANSCRIPT_CHARS {
        return Err(AppError::InputSize {
            bound: InputBound::Min,
            length,
            limit: MIN_TRANSCRIPT_CHARS,
        });
    }
    if length > MAX_TRANSCRIPT_CHARS {
        return Err(AppError::InputSize {
            bound: InputBound::Max,
            length,
            limit: MAX_TRANSCRIPT_CHARS,
        });
    }

    Ok(())
}
