//! Turns a free-text completion into validated learning content.
//!
//! Stages run strictly in order: textual repair, decode into the loose
//! [`RawLearningMaterials`], answer reconciliation, then shape validation into
//! the strict [`LearningContent`].

pub mod reconcile;
pub mod repair;
pub mod shape;

use crate::{
    config::ShapeRules,
    errors::{AppError, AppResult},
    models::domain::{LearningContent, RawLearningMaterials},
};

pub use reconcile::{reconcile_answers, resolve_answer, AnswerFix};
pub use repair::repair_completion;
pub use shape::validate_shape;

pub fn decode_completion(repaired: &str) -> AppResult<RawLearningMaterials> {
    serde_json::from_str(repaired).map_err(|e| AppError::MalformedCompletion(e.to_string()))
}

pub fn normalize_completion(raw: &str, rules: &ShapeRules) -> AppResult<LearningContent> {
    let repaired = repair_completion(raw);
    let decoded = decode_completion(&repaired)?;
    let reconciled = reconcile_answers(decoded);
    let content = validate_shape(reconciled, rules)?;

    let paragraphs = content.summary_paragraph_count();
    if paragraphs != rules.summary_paragraphs {
        log::warn!(
            "Summary has {} paragraphs, expected {}",
            paragraphs,
            rules.summary_paragraphs
        );
    }

    Ok(content)
}
