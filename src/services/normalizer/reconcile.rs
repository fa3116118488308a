use crate::models::domain::{Lenient, RawLearningMaterials, RawQuizQuestion};

/// How a declared answer was brought in line with the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFix {
    Exact,
    CaseInsensitive,
    Substring,
    FirstOption,
}

/// Picks the option a declared answer most plausibly refers to.
/// Returns `None` only when there are no options to pick from.
pub fn resolve_answer(answer: &str, options: &[String]) -> Option<(String, AnswerFix)> {
    if let Some(exact) = options.iter().find(|o| *o == answer) {
        return Some((exact.clone(), AnswerFix::Exact));
    }

    let normalized = answer.trim().to_lowercase();
    if let Some(option) = options
        .iter()
        .find(|o| o.trim().to_lowercase() == normalized)
    {
        return Some((option.clone(), AnswerFix::CaseInsensitive));
    }

    let lowered = answer.to_lowercase();
    if let Some(option) = options.iter().find(|o| {
        let option = o.to_lowercase();
        lowered.contains(&option) || option.contains(&lowered)
    }) {
        return Some((option.clone(), AnswerFix::Substring));
    }

    options
        .first()
        .map(|first| (first.clone(), AnswerFix::FirstOption))
}

/// Returns a copy of `raw` where every quiz answer names one of its options.
/// Entries missing options or an answer, or holding wrong-typed values, pass
/// through for validation to report.
pub fn reconcile_answers(raw: RawLearningMaterials) -> RawLearningMaterials {
    let quiz = raw.quiz.map(|quiz| match quiz {
        Lenient::Valid(entries) => Lenient::Valid(
            entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| match entry {
                    Lenient::Valid(question) => Lenient::Valid(reconcile_question(index, question)),
                    invalid => invalid,
                })
                .collect(),
        ),
        invalid => invalid,
    });

    RawLearningMaterials { quiz, ..raw }
}

fn reconcile_question(index: usize, question: RawQuizQuestion) -> RawQuizQuestion {
    if question.answer_matches_option() {
        return question;
    }
    let (Some(Lenient::Valid(answer)), Some(Lenient::Valid(options))) =
        (&question.correct_answer, &question.options)
    else {
        return question;
    };

    match resolve_answer(answer, options) {
        Some((_, AnswerFix::Exact)) | None => question,
        Some((resolved, fix)) => {
            if fix == AnswerFix::FirstOption {
                log::warn!(
                    "Quiz question {}: answer {:?} matches no option, defaulting to {:?}",
                    index + 1,
                    answer,
                    resolved
                );
            } else {
                log::debug!(
                    "Quiz question {}: answer {:?} reconciled to {:?} ({:?})",
                    index + 1,
                    answer,
                    resolved,
                    fix
                );
            }
            RawQuizQuestion {
                correct_answer: Some(Lenient::Valid(resolved)),
                ..question
            }
        }
    }
}
