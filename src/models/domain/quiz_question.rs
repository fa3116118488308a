use serde::{Deserialize, Serialize};

use crate::models::domain::lenient::Lenient;

/// A validated multiple-choice question. `correct_answer` is always one of `options`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// A quiz entry as decoded from a completion, before reconciliation and validation.
/// Fields may be absent or of the wrong type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuizQuestion {
    #[serde(default)]
    pub question: Option<Lenient<String>>,
    #[serde(default)]
    pub options: Option<Lenient<Vec<String>>>,
    #[serde(default, alias = "correct_answer")]
    pub correct_answer: Option<Lenient<String>>,
}

impl RawQuizQuestion {
    /// True when the declared answer is already, byte for byte, one of the options.
    pub fn answer_matches_option(&self) -> bool {
        match (&self.correct_answer, &self.options) {
            (Some(Lenient::Valid(answer)), Some(Lenient::Valid(options))) => {
                options.iter().any(|o| o == answer)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_question_accepts_snake_case_answer_key() {
        let json = r#"{"question": "Q?", "options": ["A", "B"], "correct_answer": "B"}"#;
        let parsed: RawQuizQuestion = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(parsed.correct_answer, Some(Lenient::Valid("B".to_string())));
        assert!(parsed.answer_matches_option());
    }

    #[test]
    fn raw_question_tolerates_missing_fields() {
        let parsed: RawQuizQuestion =
            serde_json::from_str(r#"{"question": "Q?"}"#).expect("should deserialize");

        assert!(parsed.options.is_none());
        assert!(parsed.correct_answer.is_none());
        assert!(!parsed.answer_matches_option());
    }

    #[test]
    fn raw_question_keeps_numeric_options_for_validation() {
        let json = r#"{"question": "Q?", "options": [3, 4, 5, 6], "correctAnswer": "3"}"#;
        let parsed: RawQuizQuestion = serde_json::from_str(json).expect("should deserialize");

        assert!(matches!(parsed.options, Some(Lenient::Invalid(_))));
        assert!(!parsed.answer_matches_option());
    }

    #[test]
    fn quiz_question_serializes_camel_case() {
        let question = QuizQuestion {
            question: "What is Rust?".to_string(),
            options: vec!["A language".to_string(), "A fungus".to_string()],
            correct_answer: "A language".to_string(),
        };

        let json = serde_json::to_value(&question).expect("should serialize");
        assert_eq!(json["correctAnswer"], "A language");
        assert!(json.get("correct_answer").is_none());
    }
}
