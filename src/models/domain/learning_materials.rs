use serde::{Deserialize, Serialize};

use crate::models::domain::{
    lenient::Lenient,
    quiz_question::{QuizQuestion, RawQuizQuestion},
};

/// Loosely-typed record decoded from a repaired completion. Every field may be
/// absent or of the wrong type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLearningMaterials {
    #[serde(default)]
    pub summary: Option<Lenient<String>>,
    #[serde(default, alias = "key_points")]
    pub key_points: Option<Lenient<Vec<String>>>,
    #[serde(default)]
    pub notes: Option<Lenient<Vec<String>>>,
    #[serde(default)]
    pub quiz: Option<Lenient<Vec<Lenient<RawQuizQuestion>>>>,
}

/// Generated content that passed shape validation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningContent {
    pub summary: String,
    pub key_points: Vec<String>,
    pub notes: Vec<String>,
    pub quiz: Vec<QuizQuestion>,
}

impl LearningContent {
    pub fn summary_paragraph_count(&self) -> usize {
        self.summary
            .split("\n\n")
            .filter(|p| !p.trim().is_empty())
            .count()
    }
}

/// The response returned to callers of both processing entry points.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningMaterials {
    pub summary: String,
    pub key_points: Vec<String>,
    pub notes: Vec<String>,
    pub quiz: Vec<QuizQuestion>,
    pub video_title: String,
    pub duration: String,
}

impl LearningMaterials {
    pub fn from_content(
        content: LearningContent,
        video_title: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            summary: content.summary,
            key_points: content.key_points,
            notes: content.notes,
            quiz: content.quiz,
            video_title: video_title.into(),
            duration: duration.into(),
        }
    }
}
