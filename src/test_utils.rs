#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    const SAMPLE_SENTENCE: &str = "Rust guarantees memory safety through ownership and borrowing. ";

    /// A plain transcript of exactly `len` characters.
    pub fn sample_transcript(len: usize) -> String {
        SAMPLE_SENTENCE.chars().cycle().take(len).collect()
    }

    /// Completion text that satisfies the default shape rules without repair.
    pub fn well_formed_completion() -> String {
        let quiz: Vec<serde_json::Value> = (1..=10)
            .map(|i| {
                json!({
                    "question": format!("What does Rust concept {} enforce?", i),
                    "options": ["Ownership", "Garbage collection", "Reflection", "Monkey patching"],
                    "correctAnswer": "Ownership"
                })
            })
            .collect();

        json!({
            "summary": "Rust is a systems language.\n\nIt enforces memory safety at compile time.\n\nOwnership is the core idea.",
            "keyPoints": [
                "Ownership governs memory",
                "Borrowing avoids copies",
                "Lifetimes bound references",
                "No garbage collector",
                "Fearless concurrency"
            ],
            "notes": [
                "Each value has a single owner. When the owner goes out of scope the value is dropped.",
                "References borrow values without taking ownership. Mutable borrows are exclusive.",
                "Lifetimes describe how long references stay valid. The compiler infers most of them.",
                "Moves transfer ownership. The previous binding can no longer be used.",
                "Clone makes explicit deep copies. Copy types are duplicated implicitly.",
                "Send and Sync mark types safe to share across threads. They are auto traits.",
                "The borrow checker runs at compile time. It has no runtime cost."
            ],
            "quiz": quiz
        })
        .to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::{config::ShapeRules, services::normalizer::normalize_completion};

    #[test]
    fn test_sample_transcript_has_requested_length() {
        assert_eq!(sample_transcript(150).chars().count(), 150);
        assert_eq!(sample_transcript(0), "");
    }

    #[test]
    fn test_well_formed_completion_normalizes() {
        let content = normalize_completion(&well_formed_completion(), &ShapeRules::default())
            .expect("fixture should satisfy the shape contract");

        assert_eq!(content.notes.len(), 7);
        assert_eq!(content.summary_paragraph_count(), 3);
    }
}
