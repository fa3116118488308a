use std::collections::HashSet;

use crate::{
    config::ShapeRules,
    errors::{AppError, AppResult},
    models::domain::{
        describe_json, LearningContent, Lenient, QuizQuestion, RawLearningMaterials,
        RawQuizQuestion,
    },
};

fn failure(message: String) -> AppError {
    AppError::ValidationFailure(message)
}

fn require<T>(field: Option<T>, name: &str) -> AppResult<T> {
    field.ok_or_else(|| failure(format!("Missing '{}' in response", name)))
}

/// Checks the shape contract and converts to the strict record.
/// The error names the first rule that failed. A wrong-typed field fails the
/// rule it would otherwise be counted against.
pub fn validate_shape(raw: RawLearningMaterials, rules: &ShapeRules) -> AppResult<LearningContent> {
    let summary = require(raw.summary, "summary")?;
    let key_points = require(raw.key_points, "keyPoints")?;
    let notes = require(raw.notes, "notes")?;
    let quiz = require(raw.quiz, "quiz")?;

    let summary = summary.into_result().map_err(|value| {
        failure(format!(
            "Expected 'summary' to be a string, got {}",
            describe_json(&value)
        ))
    })?;

    let key_points = key_points.into_result().map_err(|value| {
        failure(format!(
            "Expected exactly {} keyPoints, got {}",
            rules.key_points,
            describe_json(&value)
        ))
    })?;
    if key_points.len() != rules.key_points {
        return Err(failure(format!(
            "Expected exactly {} keyPoints, got {}",
            rules.key_points,
            key_points.len()
        )));
    }

    let notes = notes.into_result().map_err(|value| {
        failure(format!(
            "Expected at least {} notes, got {}",
            rules.min_notes,
            describe_json(&value)
        ))
    })?;
    if notes.len() < rules.min_notes {
        return Err(failure(format!(
            "Expected at least {} notes, got {}",
            rules.min_notes,
            notes.len()
        )));
    }

    let quiz = quiz.into_result().map_err(|value| {
        failure(format!(
            "Expected exactly {} quiz questions, got {}",
            rules.quiz_questions,
            describe_json(&value)
        ))
    })?;
    if quiz.len() != rules.quiz_questions {
        return Err(failure(format!(
            "Expected exactly {} quiz questions, got {}",
            rules.quiz_questions,
            quiz.len()
        )));
    }

    let quiz = quiz
        .into_iter()
        .enumerate()
        .map(|(index, entry)| validate_entry(index + 1, entry, rules))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(LearningContent {
        summary,
        key_points,
        notes,
        quiz,
    })
}

fn validate_entry(
    number: usize,
    entry: Lenient<RawQuizQuestion>,
    rules: &ShapeRules,
) -> AppResult<QuizQuestion> {
    let raw = entry.into_result().map_err(|value| {
        failure(format!(
            "Quiz question {} must be an object, got {}",
            number,
            describe_json(&value)
        ))
    })?;
    validate_question(number, raw, rules)
}

fn validate_question(
    number: usize,
    raw: RawQuizQuestion,
    rules: &ShapeRules,
) -> AppResult<QuizQuestion> {
    let field = |value: Option<Lenient<String>>, name: &str| -> AppResult<String> {
        value
            .ok_or_else(|| failure(format!("Quiz question {} missing '{}'", number, name)))?
            .into_result()
            .map_err(|v| {
                failure(format!(
                    "Quiz question {} {} must be a string, got {}",
                    number,
                    name,
                    describe_json(&v)
                ))
            })
    };

    let question = field(raw.question, "question")?;
    let options = raw
        .options
        .ok_or_else(|| failure(format!("Quiz question {} missing 'options'", number)))?
        .into_result()
        .map_err(|v| {
            failure(format!(
                "Quiz question {} options must be strings, got {}",
                number,
                describe_json(&v)
            ))
        })?;
    let correct_answer = field(raw.correct_answer, "correctAnswer")?;

    if options.len() != rules.quiz_options {
        return Err(failure(format!(
            "Quiz question {} must have exactly {} options, got {}",
            number,
            rules.quiz_options,
            options.len()
        )));
    }

    let distinct: HashSet<&String> = options.iter().collect();
    if distinct.len() != options.len() {
        return Err(failure(format!(
            "Quiz question {} has duplicate options",
            number
        )));
    }

    if !options.contains(&correct_answer) {
        return Err(failure(format!(
            "Quiz question {} correctAnswer must be one of the options",
            number
        )));
    }

    Ok(QuizQuestion {
        question,
        options,
        correct_answer,
    })
}
